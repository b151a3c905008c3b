//! View identifiers
//!
//! The closed set of views the route table can bind to. The views
//! themselves (templates, widgets, rendering) live outside this core; a
//! mounted view interacts with it only by reading store state, committing
//! mutations, and receiving route parameters.

use std::fmt;

/// Identifier of a mountable view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Home,
    Cli,
    Docs,
    Manager,
    About,
    Generate,
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewId::Home => "Home",
            ViewId::Cli => "CLI",
            ViewId::Docs => "Docs",
            ViewId::Manager => "Manager",
            ViewId::About => "About",
            ViewId::Generate => "Generate",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_match_view_identifiers() {
        assert_eq!(ViewId::Home.to_string(), "Home");
        assert_eq!(ViewId::Cli.to_string(), "CLI");
        assert_eq!(ViewId::Generate.to_string(), "Generate");
    }
}
