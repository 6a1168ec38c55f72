/// Static site content
///
/// The content table ships as `assets/content.json` and is embedded in
/// the binary, so a release build needs nothing but the image files.
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ContentError;
use crate::state::data::{Business, MediaItem, ServiceDetail};

const EMBEDDED: &str = include_str!("../assets/content.json");

#[derive(Debug, Clone)]
pub struct Content {
    pub business: Business,
    pub services: Vec<ServiceDetail>,
    /// Shared with every gallery page mount
    pub gallery: Arc<[MediaItem]>,
}

#[derive(Deserialize)]
struct RawContent {
    business: Business,
    services: Vec<ServiceDetail>,
    gallery: Vec<MediaItem>,
}

impl Content {
    /// Parse the content table compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawContent = serde_json::from_str(json)?;
        if raw.services.is_empty() {
            return Err(ContentError::Empty("services"));
        }
        if raw.gallery.is_empty() {
            return Err(ContentError::Empty("gallery items"));
        }

        log::debug!(
            "Loaded content: {} services, {} gallery items",
            raw.services.len(),
            raw.gallery.len()
        );

        Ok(Self {
            business: raw.business,
            services: raw.services,
            gallery: raw.gallery.into(),
        })
    }

    /// Find a service page by its URL slug
    pub fn service(&self, slug: &str) -> Option<&ServiceDetail> {
        self.services.iter().find(|s| s.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_embedded_content_parses() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.services.len(), 10);
        assert_eq!(content.gallery.len(), 26);
        assert_eq!(content.business.phone, "(951) 953-0658");
    }

    #[test]
    fn test_ids_and_slugs_are_unique() {
        let content = Content::embedded().unwrap();

        let ids: HashSet<_> = content.gallery.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), content.gallery.len());

        let slugs: HashSet<_> = content.services.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs.len(), content.services.len());
    }

    #[test]
    fn test_every_service_has_accordion_panels() {
        let content = Content::embedded().unwrap();
        for service in &content.services {
            assert!(!service.accordion.is_empty(), "{} has no panels", service.slug);
            assert!(!service.bullets.is_empty(), "{} has no bullets", service.slug);
        }
    }

    #[test]
    fn test_service_lookup() {
        let content = Content::embedded().unwrap();
        let ev = content.service("ev-charger-installation").unwrap();
        assert_eq!(ev.title, "EV Charger Installation");
        assert!(content.service("plumbing").is_none());
    }

    #[test]
    fn test_empty_gallery_rejected() {
        let json = EMBEDDED.replacen("\"gallery\": [", "\"gallery\": [], \"unused\": [", 1);
        assert!(matches!(Content::from_json(&json), Err(ContentError::Empty(_))));
    }

    #[test]
    fn test_malformed_content_rejected() {
        assert!(matches!(Content::from_json("{"), Err(ContentError::Parse(_))));
    }
}
