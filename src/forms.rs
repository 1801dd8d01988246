//! Contact and feedback forms.
//!
//! Validation mirrors what the shop's web forms enforce. Submitting never
//! leaves the process: a valid contact form is handed back to the caller,
//! and shared feedback is kept on an in-memory board.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::StoreLocation;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

pub const INQUIRY_SUBJECTS: &[&str] = &[
    "Lighting Product Inquiry",
    "Interior Lighting Consultation",
    "Custom Lighting Design",
    "Installation & Setup Service",
    "Warranty & After-Sales Support",
    "Bulk / Project Quotation",
    "Store / Designer Partnership",
    "Online Order & Delivery Support",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) -> bool {
    if value.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return false;
    }
    true
}

fn check_min_chars(errors: &mut Vec<FieldError>, field: &'static str, value: &str, min: usize) {
    if check_required(errors, field, value) && value.chars().count() < min {
        errors.push(FieldError::new(field, format!("must be at least {min} characters")));
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    if check_required(errors, "email", value) && !is_valid_email(value) {
        errors.push(FieldError::new("email", "is not a valid email address"));
    }
}

/// Address check in the spirit of HTML form validation: a dotted local part
/// and a dotted hostname, no whitespace. A top-level domain is not required.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > 254 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    const LOCAL_SPECIALS: &str = "!#$%&'*+/=?^_`{|}~-";
    let local_ok = !local.is_empty()
        && local.len() <= 64
        && local.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c))
        });

    let domain_ok = !domain.is_empty()
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        });

    local_ok && domain_ok
}

/// Digits, `+`, `-` and whitespace only.
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c.is_whitespace())
}

// ---------------------------------------------------------------------------
// Contact form
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub store_location: String,
    pub agreement: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            subject: INQUIRY_SUBJECTS[0].to_string(),
            message: String::new(),
            store_location: String::new(),
            agreement: false,
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_min_chars(&mut errors, "name", &self.name, NAME_MIN_CHARS);
        check_email(&mut errors, &self.email);
        if !self.phone.is_empty() && !is_valid_phone(&self.phone) {
            errors.push(FieldError::new("phone", "may only contain digits, +, - and spaces"));
        }
        if check_required(&mut errors, "subject", &self.subject)
            && !INQUIRY_SUBJECTS.contains(&self.subject.as_str())
        {
            errors.push(FieldError::new("subject", "is not a known inquiry subject"));
        }
        check_min_chars(&mut errors, "message", &self.message, MESSAGE_MIN_CHARS);
        check_required(&mut errors, "storeLocation", &self.store_location);
        if !self.agreement {
            errors.push(FieldError::new("agreement", "must be accepted"));
        }

        errors
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, then hand back the submitted values and clear the form.
    /// An invalid form is left untouched.
    pub fn submit(&mut self) -> Result<ContactForm, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "contact form rejected");
            return Err(errors);
        }

        let submitted = std::mem::take(self);
        tracing::info!(subject = %submitted.subject, store = %submitted.store_location, "contact request submitted");
        Ok(submitted)
    }
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedbackTopic {
    #[default]
    Product,
    Store,
    Service,
    Website,
    Other,
}

impl FeedbackTopic {
    pub const ALL: [FeedbackTopic; 5] = [
        FeedbackTopic::Product,
        FeedbackTopic::Service,
        FeedbackTopic::Store,
        FeedbackTopic::Website,
        FeedbackTopic::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackTopic::Product => "Product quality & design",
            FeedbackTopic::Service => "Consultation / installation service",
            FeedbackTopic::Store => "Store experience & staff",
            FeedbackTopic::Website => "Website & online experience",
            FeedbackTopic::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackForm {
    pub name: String,
    pub email: String,
    pub topic: FeedbackTopic,
    pub rating: u8,
    pub store_location_id: String,
    pub message: String,
    pub allow_share: bool,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            topic: FeedbackTopic::Product,
            rating: *RATING_RANGE.end(),
            store_location_id: String::new(),
            message: String::new(),
            allow_share: true,
        }
    }
}

impl FeedbackForm {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        check_min_chars(&mut errors, "name", &self.name, NAME_MIN_CHARS);
        check_email(&mut errors, &self.email);
        if !RATING_RANGE.contains(&self.rating) {
            errors.push(FieldError::new("rating", "must be between 1 and 5"));
        }
        check_min_chars(&mut errors, "message", &self.message, MESSAGE_MIN_CHARS);

        errors
    }

    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub name: String,
    pub email: String,
    pub topic: FeedbackTopic,
    pub rating: u8,
    pub message: String,
    pub store_location_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub allow_share: bool,
}

/// Feedback visitors agreed to share, newest first.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    entries: Vec<Feedback>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Feedback] {
        &self.entries
    }

    pub fn submit(&mut self, form: &mut FeedbackForm) -> Result<Feedback, Vec<FieldError>> {
        self.submit_at(form, Utc::now())
    }

    /// Validate and record the form as of `created_at`, then reset it.
    /// Only shareable feedback is added to the board.
    pub fn submit_at(
        &mut self,
        form: &mut FeedbackForm,
        created_at: DateTime<Utc>,
    ) -> Result<Feedback, Vec<FieldError>> {
        let errors = form.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let form = std::mem::take(form);
        let feedback = Feedback {
            name: form.name,
            email: form.email,
            topic: form.topic,
            rating: form.rating,
            message: form.message,
            store_location_id: Some(form.store_location_id).filter(|id| !id.is_empty()),
            created_at,
            allow_share: form.allow_share,
        };

        if feedback.allow_share {
            self.entries.insert(0, feedback.clone());
        }
        tracing::info!(topic = ?feedback.topic, rating = feedback.rating, shared = feedback.allow_share, "feedback received");

        Ok(feedback)
    }
}

pub fn store_name_by_id<'a>(stores: &'a [StoreLocation], id: Option<&str>) -> Option<&'a str> {
    let id = id.filter(|id| !id.is_empty())?;
    stores.iter().find(|s| s.id == id).map(|s| s.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_contact() -> ContactForm {
        ContactForm {
            name: "Mai Tran".to_string(),
            email: "mai@example.vn".to_string(),
            phone: "+84 90-123-4567".to_string(),
            message: "Need a quote for a hotel lobby.".to_string(),
            store_location: "hn".to_string(),
            agreement: true,
            ..Default::default()
        }
    }

    fn filled_feedback(allow_share: bool) -> FeedbackForm {
        FeedbackForm {
            name: "Quang".to_string(),
            email: "quang@example.com".to_string(),
            topic: FeedbackTopic::Store,
            rating: 4,
            store_location_id: "hcm".to_string(),
            message: "Friendly staff and a bright showroom.".to_string(),
            allow_share,
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn email_rules() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@shop.example.com"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email(".lead@dot.com"));
        assert!(!is_valid_email("space in@name.com"));
        assert!(!is_valid_email("user@-bad.com"));
        assert!(!is_valid_email("user@"));
    }

    #[test]
    fn phone_rules() {
        assert!(is_valid_phone("+84 90-123-4567"));
        assert!(!is_valid_phone("call me"));
    }

    #[test]
    fn empty_contact_form_reports_required_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(
            fields(&errors),
            vec!["name", "email", "message", "storeLocation", "agreement"]
        );
    }

    #[test]
    fn contact_form_checks_lengths_and_patterns() {
        let mut form = filled_contact();
        assert!(form.is_valid());

        form.name = "M".to_string();
        form.phone = "090 abc".to_string();
        form.subject = "Cars".to_string();
        form.message = "Too short".to_string();
        assert_eq!(fields(&form.validate()), vec!["name", "phone", "subject", "message"]);
    }

    #[test]
    fn contact_submit_returns_values_and_resets() {
        let mut form = filled_contact();
        let submitted = form.submit().unwrap();
        assert_eq!(submitted.store_location, "hn");
        assert_eq!(form, ContactForm::default());

        let mut invalid = ContactForm::default();
        assert!(invalid.submit().is_err());
    }

    #[test]
    fn feedback_rating_must_be_in_range() {
        let mut form = filled_feedback(true);
        form.set_rating(0);
        assert_eq!(fields(&form.validate()), vec!["rating"]);
        form.set_rating(6);
        assert_eq!(fields(&form.validate()), vec!["rating"]);
        form.set_rating(1);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn shared_feedback_is_listed_newest_first() {
        let mut board = FeedbackBoard::new();
        let first = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();

        let mut form = filled_feedback(true);
        board.submit_at(&mut form, first).unwrap();
        assert_eq!(form, FeedbackForm::default());

        let mut form = filled_feedback(true);
        form.name = "Hoa".to_string();
        board.submit_at(&mut form, second).unwrap();

        let names: Vec<_> = board.entries().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Hoa", "Quang"]);
        assert_eq!(board.entries()[0].store_location_id.as_deref(), Some("hcm"));
    }

    #[test]
    fn private_feedback_is_accepted_but_not_listed() {
        let mut board = FeedbackBoard::new();
        let mut form = filled_feedback(false);
        form.store_location_id.clear();

        let feedback = board.submit(&mut form).unwrap();
        assert!(!feedback.allow_share);
        assert_eq!(feedback.store_location_id, None);
        assert!(board.entries().is_empty());
    }

    #[test]
    fn invalid_feedback_keeps_form() {
        let mut board = FeedbackBoard::new();
        let mut form = FeedbackForm::default();
        form.name = "Bao".to_string();

        assert!(board.submit(&mut form).is_err());
        assert_eq!(form.name, "Bao");
    }
}
