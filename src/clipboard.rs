// ABOUTME: System clipboard access for copying the issued API key
// Failures are reported as WizardError::Clipboard and never abort the flow

use crate::error::WizardError;

#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), WizardError>;
}

/// Clipboard backed by arboard. The handle is opened lazily on first copy so
/// headless sessions only fail when the user actually asks to copy.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), WizardError> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new().map_err(|e| WizardError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(WizardError::Clipboard("clipboard not initialised".to_string()));
        };

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| WizardError::Clipboard(e.to_string()))?;
        tracing::debug!("Copied {} characters to clipboard", text.len());
        Ok(())
    }
}
