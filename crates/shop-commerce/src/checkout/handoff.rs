//! Hand-off port for the checkout link.

use thiserror::Error;

/// Error raised when a checkout link cannot be handed off.
#[derive(Debug, Error)]
#[error("Failed to open checkout link {url}: {reason}")]
pub struct HandoffError {
    pub url: String,
    pub reason: String,
}

impl HandoffError {
    pub fn new(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

/// Opens the checkout deep link somewhere outside the storefront.
///
/// Fire-and-forget: no response from the messaging service is consumed.
pub trait CheckoutHandoff {
    /// Open the link in a new browsing context (or the adapter's equivalent).
    fn open(&self, url: &str) -> Result<(), HandoffError>;
}

impl<T: CheckoutHandoff + ?Sized> CheckoutHandoff for &T {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        (**self).open(url)
    }
}
