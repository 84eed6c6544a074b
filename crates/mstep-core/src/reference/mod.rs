//! References: values captured by one step and consumed by later ones.
//!
//! The [`ReferenceStore`] holds the values for the duration of a run; the
//! [`ReferenceResolver`] substitutes placeholders in match specifications.

mod resolver;
mod store;

pub use resolver::{ReferenceResolver, placeholders};
pub use store::{PendingReference, ReferenceStore};
