/// Form submission backend
///
/// The lead form only knows the `FormBackend` trait. The app posts
/// through `HttpFormBackend`; tests substitute their own.
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE as CONTENT_TYPE_HEADER;
use std::time::Duration;

use crate::config::SiteConfig;
use crate::error::{ConfigError, SubmitError};
use crate::state::lead::{Submission, CONTENT_TYPE};

/// Delivers an encoded form somewhere. One call, one attempt.
#[async_trait]
pub trait FormBackend: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// POSTs URL-encoded forms to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpFormBackend {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpFormBackend {
    pub fn new(config: &SiteConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            timeout: config.request_timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormBackend for HttpFormBackend {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        log::info!("POST {} ({} form)", self.endpoint, submission.form_name);

        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
            .body(submission.body.clone())
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| SubmitError::Timeout {
                seconds: self.timeout.as_secs(),
            })?
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        log::debug!("{} answered HTTP {}", self.endpoint, status.as_u16());

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, capture the raw request, answer with `status_line`
    async fn one_shot_server(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request_complete(&request) {
                    break;
                }
            }
            let response = format!("HTTP/1.1 {status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (url, handle)
    }

    /// Headers received and body length satisfied
    fn request_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        body.len() >= length
    }

    fn backend_for(endpoint: &str, timeout_secs: u64) -> HttpFormBackend {
        let config = SiteConfig {
            endpoint: endpoint.to_string(),
            request_timeout_secs: timeout_secs,
            ..SiteConfig::default()
        };
        HttpFormBackend::new(&config).unwrap()
    }

    fn submission() -> Submission {
        Submission {
            form_name: "contact",
            body: "form-name=contact&bot-field=&name=Dana%20Ruiz".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_urlencoded_body() {
        let (url, server) = one_shot_server("200 OK").await;
        let backend = backend_for(&url, 5);

        assert_eq!(backend.submit(&submission()).await, Ok(()));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST / HTTP/1.1"));
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(request.ends_with("form-name=contact&bot-field=&name=Dana%20Ruiz"));
    }

    #[tokio::test]
    async fn test_any_2xx_is_success() {
        let (url, server) = one_shot_server("202 Accepted").await;
        assert_eq!(backend_for(&url, 5).submit(&submission()).await, Ok(()));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_non_2xx_is_rejected() {
        let (url, server) = one_shot_server("500 Internal Server Error").await;
        let result = backend_for(&url, 5).submit(&submission()).await;
        assert_eq!(result, Err(SubmitError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        drop(listener);

        let result = backend_for(&url, 5).submit(&submission()).await;
        assert!(matches!(result, Err(SubmitError::Network(_))));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let result = backend_for(&url, 1).submit(&submission()).await;
        assert_eq!(result, Err(SubmitError::Timeout { seconds: 1 }));
    }
}
