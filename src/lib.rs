//! skelhub — single-page-application shell core
//!
//! The two load-bearing pieces of the skeleton-generator UI: a
//! mutation-gated state store holding session and selection data, and a
//! static route table resolving navigated paths to view identifiers.
//! Everything visual (templates, widgets, styling) lives outside this
//! crate and interacts with it through the view capability: read state,
//! commit mutations, receive route parameters.

pub mod app;
pub mod config;
pub mod routing;
pub mod views;
