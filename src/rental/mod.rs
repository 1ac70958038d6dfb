//! Rental catalog: items that can be checked out and returned.
//!
//! Each item moves between two states:
//!
//! ```text
//! Available --checkout--> CheckedOut
//! CheckedOut --return---> Available
//! ```
//!
//! Attempting either transition from the wrong state is reported as an
//! error and leaves the catalog untouched.

pub mod catalog;
pub mod item;

pub use catalog::{Catalog, ItemId};
pub use item::{Genre, Item, ItemState};
