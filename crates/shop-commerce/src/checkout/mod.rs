//! Checkout module.
//!
//! Contains the product detail view, the order message formatter, the
//! messaging deep link, and the hand-off port.

mod detail;
mod handoff;
mod link;
mod message;

pub use detail::DetailView;
pub use handoff::{CheckoutHandoff, HandoffError};
pub use link::{encode_component, MessageLink, DEFAULT_MESSAGE_BASE_URL};
pub use message::{format_order, ORDER_GREETING};
