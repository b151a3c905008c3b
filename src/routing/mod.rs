//! Client-side routing
//!
//! Pure path-pattern matching plus the static route table. No knowledge of
//! the store or of view internals; the table resolves a navigated path to
//! a [`crate::views::ViewId`] and the parameters extracted from it.

pub mod pattern;
pub mod table;

pub use pattern::{PatternError, RouteParams, RoutePattern};
pub use table::{ResolvedRoute, Route, RouteTable};
