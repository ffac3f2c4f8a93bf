// ABOUTME: Mock API key issuance for the onboarding wizard
// Generates a display-only "sk-" key locally; nothing is authenticated or stored

use rand::rngs::ThreadRng;
use rand::Rng;

use super::credential::SubmittedCredential;
use crate::config::TokenConfig;
use crate::error::WizardError;

const SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A key shown to the user after signing up. Not a real credential.
#[derive(Clone, PartialEq, Eq)]
pub struct IssuedToken {
    token: String,
}

impl IssuedToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// First few characters followed by an ellipsis, for log-safe display
    pub fn masked(&self) -> String {
        let visible: String = self.token.chars().take(6).collect();
        format!("{visible}…")
    }
}

impl std::fmt::Debug for IssuedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IssuedToken").field("token", &self.masked()).finish()
    }
}

/// Turns a submitted credential into an API key.
/// A networked implementation may fail with `Network` or `AuthFailure`.
pub trait KeyIssuer {
    fn issue(&mut self, credential: &SubmittedCredential) -> Result<IssuedToken, WizardError>;
}

/// Local placeholder issuer: prefix plus a random lowercase alphanumeric suffix.
/// The suffix carries no security guarantee and must not back real keys.
pub struct StubKeyIssuer<R: Rng = ThreadRng> {
    rng: R,
    config: TokenConfig,
}

impl StubKeyIssuer<ThreadRng> {
    pub fn new(config: TokenConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for StubKeyIssuer<ThreadRng> {
    fn default() -> Self {
        Self::new(TokenConfig::default())
    }
}

impl<R: Rng> StubKeyIssuer<R> {
    pub const fn with_rng(config: TokenConfig, rng: R) -> Self {
        Self { rng, config }
    }

    fn suffix(&mut self) -> String {
        (0..self.config.suffix_length)
            .map(|_| char::from(SUFFIX_ALPHABET[self.rng.gen_range(0..SUFFIX_ALPHABET.len())]))
            .collect()
    }
}

impl<R: Rng> KeyIssuer for StubKeyIssuer<R> {
    fn issue(&mut self, credential: &SubmittedCredential) -> Result<IssuedToken, WizardError> {
        let suffix = self.suffix();
        let token = format!("{}{suffix}", self.config.prefix);
        tracing::info!(
            method = ?credential.method,
            suffix_len = self.config.suffix_length,
            "Issued placeholder API key"
        );
        Ok(IssuedToken { token })
    }
}
