//! The route table
//!
//! An ordered, immutable list of path-pattern → view bindings consulted on
//! every navigation. Resolution is first-match-wins in declaration order,
//! so the order routes are registered in is part of the contract — a more
//! specific pattern declared later never steals a match from an earlier
//! one.

use crate::routing::pattern::{PatternError, RouteParams, RoutePattern};
use crate::views::ViewId;

/// One path-pattern → view binding
#[derive(Debug, Clone)]
pub struct Route {
    pattern: RoutePattern,
    name: Option<String>,
    view: ViewId,
}

impl Route {
    /// Parses `pattern` and binds it to `view`
    pub fn new(pattern: &str, name: Option<&str>, view: ViewId) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: name.map(str::to_string),
            view,
        })
    }

    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn view(&self) -> ViewId {
        self.view
    }
}

/// Outcome of a successful resolution: which view mounts, with what
/// parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub view: ViewId,
    pub route_name: Option<String>,
    pub params: RouteParams,
}

/// Static ordered route table
///
/// Built once at bootstrap and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// The canonical application table
    ///
    /// Home carries two optional trailing segments, so `/home`,
    /// `/home/true` and `/home/true/<url>` all land on the same view with
    /// progressively more parameters populated.
    pub fn canonical() -> Result<Self, PatternError> {
        Ok(Self::new(vec![
            Route::new("/home/:exec?/:skeletonUrl?", Some("home"), ViewId::Home)?,
            Route::new("/cli", Some("cli"), ViewId::Cli)?,
            Route::new("/docs", Some("docs"), ViewId::Docs)?,
            Route::new("/manager", Some("manager"), ViewId::Manager)?,
            Route::new("/about", Some("about"), ViewId::About)?,
            Route::new("/generate/:skeletonUrl", None, ViewId::Generate)?,
        ]))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a navigated path to a view
    ///
    /// Patterns are tried in declaration order and the first shape match
    /// wins. A path matching nothing yields `None`; the caller decides the
    /// fallback policy.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        for route in &self.routes {
            if let Some(params) = route.pattern.matches(path) {
                log::trace!(
                    "path {:?} resolved to {} via {:?}",
                    path,
                    route.view,
                    route.pattern.as_str()
                );
                return Some(ResolvedRoute {
                    view: route.view,
                    route_name: route.name.clone(),
                    params,
                });
            }
        }
        None
    }
}
