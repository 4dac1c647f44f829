//! Section renderers for the storefront page.

mod cart;
mod detail;
mod listing;
mod notice;
mod page;

pub use cart::*;
pub use detail::*;
pub use listing::*;
pub use notice::*;
pub use page::*;
