//! Checkout hand-off adapters.

use shop_commerce::checkout::{CheckoutHandoff, HandoffError};

use crate::output::Output;

/// Opens the checkout link in the default browser.
pub struct BrowserHandoff;

impl CheckoutHandoff for BrowserHandoff {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        webbrowser::open(url).map_err(|e| HandoffError::new(url, e.to_string()))
    }
}

/// Prints the checkout link for the user to open.
pub struct PrintHandoff {
    output: Output,
}

impl PrintHandoff {
    pub fn new(output: Output) -> Self {
        Self { output }
    }
}

impl CheckoutHandoff for PrintHandoff {
    fn open(&self, url: &str) -> Result<(), HandoffError> {
        self.output.info("Open this link to send your order:");
        self.output.list_item(url);
        Ok(())
    }
}
