//! Shell controller and bootstrap wiring
//!
//! The controller is the root application instance: it constructs the
//! store and the route table once, drives navigation, applies the
//! route-miss fallback policy, and hands resolved parameters to the view
//! that mounts.

use crate::app::store::{Mutation, SessionSnapshot, SessionState, Store, StoreError};
use crate::config::{ShellConfig, ShellConfigError};
use crate::routing::{PatternError, RouteParams, RouteTable};
use crate::views::ViewId;
use thiserror::Error;

/// Shell errors that can occur during bootstrap or navigation
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("invalid shell configuration: {0}")]
    Config(#[from] ShellConfigError),

    #[error("route table construction failed: {0}")]
    RouteTable(#[from] PatternError),

    #[error("store rejected the operation: {0}")]
    Store(#[from] StoreError),

    #[error("fallback path {path:?} matches no route")]
    FallbackUnroutable { path: String },
}

/// The view currently mounted, with the parameters the route extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    pub view: ViewId,
    pub params: RouteParams,
}

/// Root application instance wiring store and route table together
///
/// Single-threaded by construction: the controller is the only writer the
/// store ever sees, so mutations apply strictly in invocation order.
pub struct ShellController {
    store: Store,
    routes: RouteTable,
    fallback_path: String,
    active: Option<MountedView>,
}

impl ShellController {
    /// Builds the controller from configuration
    ///
    /// Creates the store with its default record and the canonical route
    /// table. Both live for the rest of the session.
    pub fn bootstrap(config: ShellConfig) -> Result<Self, ShellError> {
        config.validate()?;
        Ok(Self {
            store: Store::new(config.strict),
            routes: RouteTable::canonical()?,
            fallback_path: config.fallback_path,
            active: None,
        })
    }

    /// Read access to the shared store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Read access to the shared session record
    pub fn state(&self) -> &SessionState {
        self.store.state()
    }

    /// The route table driving navigation
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The currently mounted view, if navigation has happened yet
    pub fn active(&self) -> Option<&MountedView> {
        self.active.as_ref()
    }

    /// Commits a mutation on behalf of the mounted view
    ///
    /// This is the write half of the view capability; reads go through
    /// [`ShellController::state`].
    pub fn commit(&mut self, mutation: Mutation) {
        self.store.commit(mutation);
    }

    /// Applies a backend-provided session snapshot
    pub fn hydrate_session(&mut self, snapshot: SessionSnapshot) {
        self.store.commit(Mutation::UpdateSession(snapshot));
    }

    /// Replaces the whole record outside the mutation vocabulary
    ///
    /// Fails on a strict-mode store; see [`Store::replace_state`].
    pub fn restore_state(&mut self, state: SessionState) -> Result<(), ShellError> {
        self.store.replace_state(state)?;
        Ok(())
    }

    /// Handles one navigation event
    ///
    /// Resolves the path against the route table; on a miss the
    /// configured fallback path is resolved instead. The resolved view
    /// becomes the active view and its parameters are handed off to the
    /// store where the view contract says so (`exec`, `skeletonUrl`).
    pub fn navigate(&mut self, path: &str) -> Result<&MountedView, ShellError> {
        let resolved = match self.routes.resolve(path) {
            Some(resolved) => resolved,
            None => {
                log::warn!(
                    "no route matches {:?}, falling back to {:?}",
                    path,
                    self.fallback_path
                );
                self.routes
                    .resolve(&self.fallback_path)
                    .ok_or_else(|| ShellError::FallbackUnroutable {
                        path: self.fallback_path.clone(),
                    })?
            }
        };

        log::info!("mounting {} for {:?}", resolved.view, path);
        self.apply_param_handoff(&resolved.params);
        let mounted = MountedView {
            view: resolved.view,
            params: resolved.params,
        };
        Ok(self.active.insert(mounted))
    }

    /// Parameter-to-store plumbing performed on mount
    ///
    /// An `exec` segment is boolean-coerced and an embedded skeleton URL
    /// is stored, so later views see the selection without re-parsing the
    /// path. Absent optional segments commit nothing.
    fn apply_param_handoff(&mut self, params: &RouteParams) {
        if params.get("exec").is_some() {
            self.store.commit(Mutation::SetExec(params.flag("exec")));
        }
        if let Some(url) = params.get("skeletonUrl") {
            self.store
                .commit(Mutation::SetSkeletonUrl(Some(url.to_string())));
        }
    }
}
