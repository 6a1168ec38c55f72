/// Lead-capture form state
///
/// A form owns its field values and a four-state submission status.
/// Status changes only through the named transitions below:
///
/// ```text
/// Idle/Success/Error --begin_submit--> Submitting
/// Submitting --complete_submit(Ok)--> Success   (fields cleared)
/// Submitting --complete_submit(Err)--> Error    (fields kept)
/// Success/Error --tick(deadline) | dismiss--> Idle
/// ```
///
/// Time is passed in explicitly so the auto-reset deadline can be driven
/// by a UI timer in the app and by a simulated clock in tests.
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{FieldError, SubmitError};
use crate::submit::FormBackend;

/// Discriminator field so a shared backend can tell forms apart
pub const FORM_NAME_FIELD: &str = "form-name";
/// Anti-bot field; humans never see it, so it is always sent empty
pub const HONEYPOT_FIELD: &str = "bot-field";
/// Body encoding of every submission
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Minimum digit count for a phone number to be accepted
const MIN_PHONE_DIGITS: usize = 7;

/// Kind of input widget a field is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    /// Picked from `SERVICE_OPTIONS`
    Choice,
    Multiline,
}

/// Static description of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
}

const fn field(name: &'static str, label: &'static str, input: InputKind, required: bool) -> FieldSpec {
    FieldSpec { name, label, input, required }
}

const CONTACT_FIELDS: &[FieldSpec] = &[
    field("name", "Name", InputKind::Text, true),
    field("email", "Email", InputKind::Email, true),
    field("phone", "Phone", InputKind::Tel, true),
    field("service", "Service Needed", InputKind::Choice, true),
    field("message", "Project Details", InputKind::Multiline, true),
];

const ESTIMATE_FIELDS: &[FieldSpec] = &[
    field("firstName", "First Name", InputKind::Text, true),
    field("lastName", "Last Name", InputKind::Text, true),
    field("email", "Email", InputKind::Email, true),
    field("phone", "Phone", InputKind::Tel, true),
    field("city", "City", InputKind::Text, true),
    field("zipCode", "Zip Code", InputKind::Text, true),
    field("message", "How can we help?", InputKind::Multiline, false),
];

/// One entry of the "Service Needed" choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    /// Value sent to the endpoint
    pub value: &'static str,
    pub label: &'static str,
}

impl fmt::Display for ServiceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

pub const SERVICE_OPTIONS: &[ServiceOption] = &[
    ServiceOption { value: "electrical", label: "Electrical Repair" },
    ServiceOption { value: "remodeling", label: "Remodeling/Renovation" },
    ServiceOption { value: "ev-charger", label: "EV Charger Installation" },
    ServiceOption { value: "adu", label: "ADU Electrical Services" },
    ServiceOption { value: "insurance", label: "Insurance Electrical Work" },
    ServiceOption { value: "residential", label: "Residential Service" },
    ServiceOption { value: "commercial", label: "Commercial Service" },
    ServiceOption { value: "security", label: "Security Systems" },
    ServiceOption { value: "network", label: "Network/Data Cabling" },
    ServiceOption { value: "audio-video", label: "Audio/Video Installation" },
    ServiceOption { value: "other", label: "Other Service" },
];

/// Look up a choice by the value stored in the form
pub fn service_option(value: &str) -> Option<ServiceOption> {
    SERVICE_OPTIONS.iter().copied().find(|option| option.value == value)
}

/// Which variant of the form this is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// "Request a Quote" on the home page
    Contact,
    /// "Get a FREE Estimate" on service pages
    Estimate,
}

impl FormKind {
    /// Value of the discriminator field
    pub fn form_name(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Estimate => "estimate",
        }
    }

    /// Declared fields, in submission order
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Contact => CONTACT_FIELDS,
            Self::Estimate => ESTIMATE_FIELDS,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Contact => "Submit Request",
            Self::Estimate => "Submit Your Request",
        }
    }
}

/// Submission status exposed to the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// How long a result notice stays before the form returns to Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetDelays {
    pub success: Duration,
    pub error: Duration,
}

impl Default for ResetDelays {
    fn default() -> Self {
        Self {
            success: Duration::from_secs(8),
            error: Duration::from_secs(5),
        }
    }
}

/// A serialized form, ready to POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form_name: &'static str,
    /// URL-encoded body
    pub body: String,
}

/// The lead-capture form of one mounted page
#[derive(Debug, Clone)]
pub struct LeadForm {
    kind: FormKind,
    /// Declared fields first (in order), then any extra names written by callers
    fields: Vec<(String, String)>,
    status: SubmitStatus,
    /// When the current Success/Error notice expires
    reset_at: Option<Instant>,
    delays: ResetDelays,
    /// Email captured when the in-flight submission started
    in_flight_email: Option<String>,
    /// Email named in the success notice
    acknowledged_email: Option<String>,
}

impl LeadForm {
    /// Mount a form with all declared fields empty
    pub fn new(kind: FormKind, delays: ResetDelays) -> Self {
        Self {
            kind,
            fields: Self::empty_fields(kind),
            status: SubmitStatus::Idle,
            reset_at: None,
            delays,
            in_flight_email: None,
            acknowledged_email: None,
        }
    }

    fn empty_fields(kind: FormKind) -> Vec<(String, String)> {
        kind.fields()
            .iter()
            .map(|spec| (spec.name.to_string(), String::new()))
            .collect()
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Current value of a field ("" when never written)
    pub fn value(&self, name: &str) -> &str {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// All fields in storage order
    #[cfg(test)]
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// True when every field is empty
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|(_, value)| value.is_empty())
    }

    /// Deadline of the pending auto-reset, if a notice is showing
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_at
    }

    /// Address the success notice should name
    pub fn acknowledged_email(&self) -> Option<&str> {
        self.acknowledged_email.as_deref()
    }

    /// Set a field. Last write wins; no validation happens here.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    /// Check the inputs the way native required/type constraints would.
    ///
    /// Returns the first problem found, in declared field order.
    pub fn validate(&self) -> Result<(), FieldError> {
        for spec in self.kind.fields() {
            let value = self.value(spec.name).trim();
            if value.is_empty() {
                if spec.required {
                    return Err(FieldError::Missing { field: spec.name });
                }
                continue;
            }
            match spec.input {
                InputKind::Email if !is_valid_email(value) => return Err(FieldError::InvalidEmail),
                InputKind::Tel if !is_valid_phone(value) => return Err(FieldError::InvalidPhone),
                _ => {}
            }
        }
        Ok(())
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.status != SubmitStatus::Submitting && self.validate().is_ok()
    }

    /// Start a submission.
    ///
    /// Returns `None` (and changes nothing) while a submission is already
    /// in flight. Otherwise moves to `Submitting`, drops any pending
    /// notice deadline and returns the encoded body to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.status == SubmitStatus::Submitting {
            log::debug!("Ignoring submit of {} form: already submitting", self.kind.form_name());
            return None;
        }

        self.status = SubmitStatus::Submitting;
        self.reset_at = None;
        self.acknowledged_email = None;
        self.in_flight_email = Some(self.value("email").trim().to_string()).filter(|e| !e.is_empty());

        Some(Submission {
            form_name: self.kind.form_name(),
            body: self.encode(),
        })
    }

    /// Apply the outcome of the submission started by `begin_submit`.
    ///
    /// `now` is when the outcome arrived; the notice deadline is measured
    /// from it. Outcomes arriving outside `Submitting` are stale and ignored.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmitError>, now: Instant) {
        if self.status != SubmitStatus::Submitting {
            log::debug!(
                "Ignoring stale submission result for {} form (status {:?})",
                self.kind.form_name(),
                self.status
            );
            return;
        }

        match outcome {
            Ok(()) => {
                log::info!("{} form submitted", self.kind.form_name());
                self.status = SubmitStatus::Success;
                self.fields = Self::empty_fields(self.kind);
                self.acknowledged_email = self.in_flight_email.take();
                self.reset_at = Some(now + self.delays.success);
            }
            Err(e) => {
                log::error!("{} form submission failed: {}", self.kind.form_name(), e);
                self.status = SubmitStatus::Error;
                self.in_flight_email = None;
                self.reset_at = Some(now + self.delays.error);
            }
        }
    }

    /// Start a submission through `backend`.
    ///
    /// Returns the pending request, or `None` without contacting the
    /// backend while a submission is already in flight. The request does
    /// not borrow the form; hand its outcome to `complete_submit`.
    pub fn submit<B>(&mut self, backend: Arc<B>) -> Option<impl Future<Output = Result<(), SubmitError>> + Send + 'static>
    where
        B: FormBackend + ?Sized + 'static,
    {
        let submission = self.begin_submit()?;
        Some(async move { backend.submit(&submission).await })
    }

    /// Advance the clock. Returns true if the notice expired.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.return_to_idle();
                true
            }
            _ => false,
        }
    }

    /// Close the Success/Error notice right away
    pub fn dismiss(&mut self) {
        if matches!(self.status, SubmitStatus::Success | SubmitStatus::Error) {
            self.return_to_idle();
        }
    }

    fn return_to_idle(&mut self) {
        self.status = SubmitStatus::Idle;
        self.reset_at = None;
        self.acknowledged_email = None;
    }

    /// URL-encode the form: discriminator, honeypot, declared fields in
    /// order, then extra fields sorted by name
    fn encode(&self) -> String {
        let mut body = String::new();
        push_pair(&mut body, FORM_NAME_FIELD, self.kind.form_name());
        push_pair(&mut body, HONEYPOT_FIELD, "");

        let declared = self.kind.fields();
        let mut extras: Vec<&(String, String)> = Vec::new();
        for entry in &self.fields {
            if declared.iter().any(|spec| spec.name == entry.0) {
                push_pair(&mut body, &entry.0, &entry.1);
            } else {
                extras.push(entry);
            }
        }
        extras.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, value) in extras {
            push_pair(&mut body, name, value);
        }
        body
    }
}

fn push_pair(body: &mut String, name: &str, value: &str) {
    if !body.is_empty() {
        body.push('&');
    }
    body.push_str(&urlencoding::encode(name));
    body.push('=');
    body.push_str(&urlencoding::encode(value));
}

/// `local@domain.tld` shape, no whitespace
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Digits plus the usual separators, with enough digits to dial
fn is_valid_phone(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '+' | '.');
    value.chars().all(allowed) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
