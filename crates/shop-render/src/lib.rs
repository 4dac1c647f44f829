//! HTML rendering for the storefront.
//!
//! Section renderers turn storefront state into markup fragments:
//! - **Listing**: category heading and product grid, or a placeholder
//! - **Cart**: count badge and cart panel with per-line controls
//! - **Detail**: product modal with its quantity stepper
//! - **Notice**: transient confirmation or warning
//!
//! [`HtmlView`] implements the storefront's view port by keeping the latest
//! fragment of each region, and [`render_page`] assembles them into a
//! complete document.

mod escape;
mod sections;
mod view;

pub use sections::*;
pub use view::HtmlView;
