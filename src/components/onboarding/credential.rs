// ABOUTME: Account step input: sign-in method selection and credential capture
// Unselected -> Selecting(method) -> Submitted, gated on a non-empty value

use serde::Serialize;

use crate::error::ValidationError;

/// Ways a user can identify themselves on the account step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMethod {
    Twitter,
    GitHub,
    Email,
    Phone,
}

impl AuthMethod {
    pub const fn all() -> &'static [Self] {
        &[Self::Twitter, Self::GitHub, Self::Email, Self::Phone]
    }

    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Twitter => "Continue with Twitter",
            Self::GitHub => "Continue with GitHub",
            Self::Email => "Continue with Email",
            Self::Phone => "Continue with Phone",
        }
    }

    pub const fn field_label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter Handle",
            Self::GitHub => "GitHub Username",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Twitter => "@yourhandle",
            Self::GitHub => "octocat",
            Self::Email => "you@example.com",
            Self::Phone => "+1 (555) 000-0000",
        }
    }
}

/// Input events for the account step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialEvent {
    /// Highlight the next method in the chooser
    NextMethod,
    /// Highlight the previous method in the chooser
    PreviousMethod,
    /// Pick the highlighted method
    ChooseHighlighted,
    Select(AuthMethod),
    InputChar(char),
    Paste(String),
    Backspace,
    Clear,
    /// Drop the chosen method and return to the chooser
    ChangeMethod,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialPhase {
    Unselected,
    Selecting { method: AuthMethod, value: String },
    Submitted { method: AuthMethod, value: String },
}

/// A credential that passed validation and was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCredential {
    pub method: AuthMethod,
    pub value: String,
}

/// What an accepted event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialOutcome {
    Updated,
    Submitted(SubmittedCredential),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct CredentialCapture {
    phase: CredentialPhase,
    highlighted: usize,
}

impl Default for CredentialCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialCapture {
    pub const fn new() -> Self {
        Self {
            phase: CredentialPhase::Unselected,
            highlighted: 0,
        }
    }

    pub const fn phase(&self) -> &CredentialPhase {
        &self.phase
    }

    pub fn highlighted(&self) -> AuthMethod {
        AuthMethod::all()[self.highlighted]
    }

    pub const fn method(&self) -> Option<AuthMethod> {
        match &self.phase {
            CredentialPhase::Unselected => None,
            CredentialPhase::Selecting { method, .. } | CredentialPhase::Submitted { method, .. } => {
                Some(*method)
            }
        }
    }

    pub fn value(&self) -> &str {
        match &self.phase {
            CredentialPhase::Unselected => "",
            CredentialPhase::Selecting { value, .. } | CredentialPhase::Submitted { value, .. } => value,
        }
    }

    /// Non-empty after trimming; no format checks
    pub fn is_valid(&self) -> bool {
        !self.value().trim().is_empty()
    }

    pub const fn is_submitted(&self) -> bool {
        matches!(self.phase, CredentialPhase::Submitted { .. })
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self.phase, CredentialPhase::Selecting { .. })
    }

    pub fn apply(&mut self, event: CredentialEvent) -> Result<CredentialOutcome, ValidationError> {
        if self.is_submitted() {
            return Ok(CredentialOutcome::Ignored);
        }

        match event {
            CredentialEvent::NextMethod => {
                self.highlighted = (self.highlighted + 1) % AuthMethod::all().len();
                Ok(CredentialOutcome::Updated)
            }
            CredentialEvent::PreviousMethod => {
                let len = AuthMethod::all().len();
                self.highlighted = (self.highlighted + len - 1) % len;
                Ok(CredentialOutcome::Updated)
            }
            CredentialEvent::ChooseHighlighted => {
                let method = self.highlighted();
                self.select(method);
                Ok(CredentialOutcome::Updated)
            }
            CredentialEvent::Select(method) => {
                self.select(method);
                Ok(CredentialOutcome::Updated)
            }
            CredentialEvent::ChangeMethod => {
                self.phase = CredentialPhase::Unselected;
                Ok(CredentialOutcome::Updated)
            }
            CredentialEvent::InputChar(c) => Ok(self.edit(|value| value.push(c))),
            CredentialEvent::Paste(text) => {
                Ok(self.edit(|value| value.extend(text.chars().filter(|c| !c.is_control()))))
            }
            CredentialEvent::Backspace => Ok(self.edit(|value| {
                value.pop();
            })),
            CredentialEvent::Clear => Ok(self.edit(String::clear)),
            CredentialEvent::Submit => self.submit(),
        }
    }

    fn select(&mut self, method: AuthMethod) {
        if let Some(idx) = AuthMethod::all().iter().position(|m| *m == method) {
            self.highlighted = idx;
        }
        self.phase = CredentialPhase::Selecting {
            method,
            value: String::new(),
        };
    }

    fn edit(&mut self, f: impl FnOnce(&mut String)) -> CredentialOutcome {
        match &mut self.phase {
            CredentialPhase::Selecting { value, .. } => {
                f(value);
                CredentialOutcome::Updated
            }
            _ => CredentialOutcome::Ignored,
        }
    }

    fn submit(&mut self) -> Result<CredentialOutcome, ValidationError> {
        let CredentialPhase::Selecting { method, value } = &self.phase else {
            return Err(ValidationError::NoMethodSelected);
        };

        if value.trim().is_empty() {
            return Err(ValidationError::EmptyCredential);
        }

        let submitted = SubmittedCredential {
            method: *method,
            value: value.trim().to_string(),
        };
        self.phase = CredentialPhase::Submitted {
            method: submitted.method,
            value: submitted.value.clone(),
        };
        Ok(CredentialOutcome::Submitted(submitted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(method: AuthMethod, text: &str) -> CredentialCapture {
        let mut capture = CredentialCapture::new();
        capture.apply(CredentialEvent::Select(method)).unwrap();
        for c in text.chars() {
            capture.apply(CredentialEvent::InputChar(c)).unwrap();
        }
        capture
    }

    #[test]
    fn test_validity_for_every_method() {
        for method in AuthMethod::all() {
            assert!(!typed(*method, "").is_valid());
            assert!(!typed(*method, "   ").is_valid());
            assert!(typed(*method, "x").is_valid());
        }
    }

    #[test]
    fn test_no_format_validation() {
        let mut capture = typed(AuthMethod::Email, "not-an-email");
        let outcome = capture.apply(CredentialEvent::Submit).unwrap();
        assert!(matches!(outcome, CredentialOutcome::Submitted(_)));
    }

    #[test]
    fn test_empty_submit_rejected() {
        let mut capture = typed(AuthMethod::Email, "");
        assert_eq!(
            capture.apply(CredentialEvent::Submit),
            Err(ValidationError::EmptyCredential)
        );
        assert!(capture.is_editing());
    }

    #[test]
    fn test_submit_without_method_rejected() {
        let mut capture = CredentialCapture::new();
        assert_eq!(
            capture.apply(CredentialEvent::Submit),
            Err(ValidationError::NoMethodSelected)
        );
    }

    #[test]
    fn test_selecting_resets_value() {
        let mut capture = typed(AuthMethod::Email, "a@b.com");
        capture.apply(CredentialEvent::Select(AuthMethod::Phone)).unwrap();
        assert_eq!(capture.method(), Some(AuthMethod::Phone));
        assert_eq!(capture.value(), "");
        assert!(!capture.is_valid());
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut capture = typed(AuthMethod::GitHub, "octocat");
        capture.apply(CredentialEvent::Submit).unwrap();

        assert_eq!(
            capture.apply(CredentialEvent::InputChar('x')),
            Ok(CredentialOutcome::Ignored)
        );
        assert_eq!(
            capture.apply(CredentialEvent::ChangeMethod),
            Ok(CredentialOutcome::Ignored)
        );
        assert_eq!(capture.value(), "octocat");
        assert!(capture.is_submitted());
    }

    #[test]
    fn test_backspace_and_clear_recompute_validity() {
        let mut capture = typed(AuthMethod::Phone, "5");
        assert!(capture.is_valid());
        capture.apply(CredentialEvent::Backspace).unwrap();
        assert!(!capture.is_valid());

        capture.apply(CredentialEvent::Paste("555\n0100".to_string())).unwrap();
        assert_eq!(capture.value(), "5550100");
        capture.apply(CredentialEvent::Clear).unwrap();
        assert_eq!(capture.value(), "");
    }

    #[test]
    fn test_chooser_wraps() {
        let mut capture = CredentialCapture::new();
        assert_eq!(capture.highlighted(), AuthMethod::Twitter);
        capture.apply(CredentialEvent::PreviousMethod).unwrap();
        assert_eq!(capture.highlighted(), AuthMethod::Phone);
        capture.apply(CredentialEvent::NextMethod).unwrap();
        capture.apply(CredentialEvent::NextMethod).unwrap();
        assert_eq!(capture.highlighted(), AuthMethod::GitHub);

        capture.apply(CredentialEvent::ChooseHighlighted).unwrap();
        assert_eq!(capture.method(), Some(AuthMethod::GitHub));
    }

    #[test]
    fn test_input_before_selection_ignored() {
        let mut capture = CredentialCapture::new();
        assert_eq!(
            capture.apply(CredentialEvent::InputChar('a')),
            Ok(CredentialOutcome::Ignored)
        );
    }
}
