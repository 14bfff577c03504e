//! Contact and newsletter forms.
//!
//! Both are local state only. A successful submit flips a flag and clears the
//! inputs; nothing leaves the process.

use tracing::info;

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your@email.com",
            ContactField::Message => "How can we help you?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn submit(&mut self) -> Result<(), FormError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field.label()));
            }
        }
        validate_email(&self.email)?;

        info!(name = %self.name.trim(), "contact message accepted (not sent)");
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.submitted = true;
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Returns to an empty form after a submission.
    pub fn send_another(&mut self) {
        self.submitted = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    subscribed: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.email.trim().is_empty() {
            return Err(FormError::MissingField("Email"));
        }
        validate_email(&self.email)?;

        info!("newsletter signup accepted (not sent)");
        self.email.clear();
        self.subscribed = true;
        Ok(())
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    let invalid = || FormError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada Lovelace");
        form.set(ContactField::Email, "ada@example.org");
        form.set(ContactField::Message, "Do you open on holidays?");
        form
    }

    #[test]
    fn contact_submit_sets_flag_and_clears_fields() {
        let mut form = filled();
        form.submit().unwrap();

        assert!(form.is_submitted());
        assert_eq!(form.get(ContactField::Name), "");
        assert_eq!(form.get(ContactField::Email), "");
        assert_eq!(form.get(ContactField::Message), "");

        form.send_another();
        assert!(!form.is_submitted());
    }

    #[test]
    fn contact_requires_every_field() {
        for field in ContactField::ALL {
            let mut form = filled();
            form.set(field, "   ");
            assert_eq!(form.submit(), Err(FormError::MissingField(field.label())));
            assert!(!form.is_submitted());
        }
    }

    #[test]
    fn contact_rejects_bad_email_without_clearing() {
        let mut form = filled();
        form.set(ContactField::Email, "not-an-email");
        assert!(matches!(form.submit(), Err(FormError::InvalidEmail(_))));
        assert_eq!(form.get(ContactField::Name), "Ada Lovelace");
    }

    #[test]
    fn newsletter_subscribes_once_email_given() {
        let mut form = NewsletterForm::new();
        assert_eq!(form.submit(), Err(FormError::MissingField("Email")));
        assert!(!form.is_subscribed());

        form.email = "  visitor@gallery.art ".to_string();
        form.submit().unwrap();
        assert!(form.is_subscribed());
        assert!(form.email.is_empty());
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.co", "first.last@mail.example.com", " padded@x.io "] {
            assert!(validate_email(ok).is_ok(), "{ok}");
        }
        for bad in ["", "@b.co", "a@", "a@b", "a@b.", "a@@b.co", "a b@c.de", "a@.co"] {
            assert!(validate_email(bad).is_err(), "{bad}");
        }
    }
}
