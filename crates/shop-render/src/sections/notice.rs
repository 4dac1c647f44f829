//! Notice section - transient notifications.

use shop_commerce::storefront::Notice;

use crate::escape::html_escape;

/// How long an info notice stays on screen.
pub const NOTICE_DISMISS_MS: u64 = 2000;

/// Render a notice. Info notices carry their dismissal delay; warnings
/// stay until acknowledged.
pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Info(text) => format!(
            r#"<div class="notification info" role="status" data-dismiss-after="{}">{}</div>"#,
            NOTICE_DISMISS_MS,
            html_escape(text)
        ),
        Notice::Warning(text) => format!(
            r#"<div class="notification warning" role="alert">{}</div>"#,
            html_escape(text)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_notice_dismisses() {
        let html = render_notice(&Notice::Info("Added to cart!".to_string()));
        assert!(html.contains(r#"data-dismiss-after="2000""#));
        assert!(html.contains("Added to cart!"));
    }

    #[test]
    fn test_warning_notice_persists() {
        let html = render_notice(&Notice::Warning("Your cart is empty!".to_string()));
        assert!(html.contains(r#"role="alert""#));
        assert!(!html.contains("data-dismiss-after"));
    }
}
