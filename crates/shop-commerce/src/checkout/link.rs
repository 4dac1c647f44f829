//! Messaging deep link carrying the order message.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Default deep-link base of the messaging service.
pub const DEFAULT_MESSAGE_BASE_URL: &str = "https://wa.me";

/// Characters left unescaped by URI component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string as a URI component.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Builds deep links of the form `{base}/{recipient}?text={message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLink {
    /// Base URL of the messaging service.
    pub base_url: String,
    /// Recipient (phone number in international form, digits only).
    /// Empty lets the messaging app ask for a contact.
    pub recipient: String,
}

impl MessageLink {
    /// Create a link builder.
    pub fn new(base_url: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            recipient: recipient.into(),
        }
    }

    /// Link to the default messaging service.
    pub fn to_recipient(recipient: impl Into<String>) -> Self {
        Self::new(DEFAULT_MESSAGE_BASE_URL, recipient)
    }

    /// Build the deep link for a message.
    pub fn url_for(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.recipient,
            encode_component(message)
        )
    }
}

impl Default for MessageLink {
    fn default() -> Self {
        Self::to_recipient("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_encoding() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("Hi! (x)*~'_.-"), "Hi!%20(x)*~'_.-");
        assert_eq!(encode_component("\u{20b9}"), "%E2%82%B9");
        assert_eq!(encode_component("\n"), "%0A");
    }

    #[test]
    fn test_url_for() {
        let link = MessageLink::new("https://wa.me/", "910000000000");
        assert_eq!(
            link.url_for("Total: 5"),
            "https://wa.me/910000000000?text=Total%3A%205"
        );
    }

    #[test]
    fn test_default_has_no_recipient() {
        assert_eq!(MessageLink::default().url_for("x"), "https://wa.me/?text=x");
    }
}
