//! Centralized application state store
//!
//! Defines the single source of truth for cross-view session and selection
//! state, and the closed vocabulary of mutations that may alter it. Views
//! read the record through a shared reference and write exclusively by
//! committing a `Mutation`; the exhaustive dispatch makes an unrecognized
//! mutation unrepresentable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shared session/UI-selection record
///
/// Created once at bootstrap with all fields unset and kept alive for the
/// whole session. Fields are public for reading; the store only ever hands
/// out shared references, so writes must go through [`Store::commit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    /// Identifier of the currently chosen project skeleton, if any
    pub selected_skeleton: Option<String>,
    /// Source location of the selected skeleton
    pub skeleton_url: Option<String>,
    /// Execution/run mode toggle
    pub exec: bool,
    /// Authenticated user identifier
    pub logged_in_user_id: Option<String>,
    /// Display name of the logged-in user
    pub logged_in_display_name: Option<String>,
    /// Avatar URL of the logged-in user
    pub logged_in_picture_url: Option<String>,
    /// Profile page URL of the logged-in user
    pub logged_in_profile_url: Option<String>,
    /// Whether the session carries informational data only, as opposed to
    /// a fully authenticated session
    pub logged_in_info_only: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_skeleton: None,
            skeleton_url: None,
            exec: false,
            logged_in_user_id: None,
            logged_in_display_name: None,
            logged_in_picture_url: None,
            logged_in_profile_url: None,
            logged_in_info_only: true,
        }
    }
}

/// Complete session snapshot supplied by the authentication backend
///
/// `UpdateSession` replaces all session fields from this snapshot; fields
/// absent from the input become unset rather than being preserved, so the
/// caller is expected to supply the full picture every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default)]
    pub logged_in_user_id: Option<String>,
    #[serde(default)]
    pub logged_in_display_name: Option<String>,
    #[serde(default)]
    pub logged_in_picture_url: Option<String>,
    #[serde(default)]
    pub logged_in_profile_url: Option<String>,
    #[serde(default = "info_only_default")]
    pub logged_in_info_only: bool,
}

fn info_only_default() -> bool {
    true
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            logged_in_user_id: None,
            logged_in_display_name: None,
            logged_in_picture_url: None,
            logged_in_profile_url: None,
            logged_in_info_only: true,
        }
    }
}

/// The closed set of sanctioned state mutations
///
/// One variant per operation; dispatch in [`Store::commit`] is an
/// exhaustive `match`, so adding a variant without a handler fails to
/// compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Replace the selected skeleton identifier
    SetSelectedSkeleton(Option<String>),
    /// Replace the skeleton source URL
    SetSkeletonUrl(Option<String>),
    /// Replace the execution-mode toggle
    SetExec(bool),
    /// Replace the logged-in user id only, leaving the rest of the
    /// session fields untouched
    LoginUser(String),
    /// Wholesale replace of all session fields from a snapshot
    UpdateSession(SessionSnapshot),
}

/// Store operation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("state replaced outside the mutation vocabulary while strict mode is enabled")]
    StrictModeViolation,
}

/// Mutation-gated container for the shared [`SessionState`] record
///
/// Constructed once at bootstrap and owned by the controller. Strict mode
/// (the default) rejects the one write path that bypasses the mutation
/// vocabulary, [`Store::replace_state`].
#[derive(Debug, Clone)]
pub struct Store {
    state: SessionState,
    strict: bool,
}

impl Store {
    /// Creates a store holding the default (all-unset) record
    pub fn new(strict: bool) -> Self {
        Self {
            state: SessionState::default(),
            strict,
        }
    }

    /// Read access to the current record
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether out-of-band state replacement is rejected
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Applies one mutation to the record
    ///
    /// Synchronous and total: every variant is handled, nothing is
    /// validated or returned, and the only observable effect is the
    /// documented field replacement. Callers read the record afterward.
    pub fn commit(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetSelectedSkeleton(skeleton) => {
                log::debug!("selected skeleton mutated to {:?}", skeleton);
                self.state.selected_skeleton = skeleton;
            }
            Mutation::SetSkeletonUrl(url) => {
                log::debug!("skeleton url mutated to {:?}", url);
                self.state.skeleton_url = url;
            }
            Mutation::SetExec(exec) => {
                log::debug!("exec mutated to {}", exec);
                self.state.exec = exec;
            }
            Mutation::LoginUser(user_id) => {
                self.state.logged_in_user_id = Some(user_id);
            }
            Mutation::UpdateSession(snapshot) => {
                self.state.logged_in_user_id = snapshot.logged_in_user_id;
                self.state.logged_in_display_name = snapshot.logged_in_display_name;
                self.state.logged_in_picture_url = snapshot.logged_in_picture_url;
                self.state.logged_in_profile_url = snapshot.logged_in_profile_url;
                self.state.logged_in_info_only = snapshot.logged_in_info_only;
            }
        }
    }

    /// Replaces the whole record, bypassing the mutation vocabulary
    ///
    /// Exists for hydration by an embedding layer. A strict-mode store
    /// rejects the call so that misuse surfaces during development instead
    /// of silently corrupting state.
    pub fn replace_state(&mut self, state: SessionState) -> Result<(), StoreError> {
        if self.strict {
            return Err(StoreError::StrictModeViolation);
        }
        self.state = state;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> Store {
        let mut store = Store::new(true);
        store.commit(Mutation::SetSelectedSkeleton(Some("java-groovy".into())));
        store.commit(Mutation::SetSkeletonUrl(Some(
            "http://example.com/tpl".into(),
        )));
        store.commit(Mutation::SetExec(true));
        store.commit(Mutation::LoginUser("u1".into()));
        store
    }

    #[test]
    fn default_record_is_unset() {
        let store = Store::new(true);
        let state = store.state();
        assert_eq!(state.selected_skeleton, None);
        assert_eq!(state.skeleton_url, None);
        assert!(!state.exec);
        assert_eq!(state.logged_in_user_id, None);
        assert_eq!(state.logged_in_display_name, None);
        assert_eq!(state.logged_in_picture_url, None);
        assert_eq!(state.logged_in_profile_url, None);
        assert!(state.logged_in_info_only);
    }

    #[test]
    fn set_selected_skeleton_touches_only_its_field() {
        let mut store = populated_store();
        let before = store.state().clone();

        store.commit(Mutation::SetSelectedSkeleton(Some("kotlin".into())));

        let after = store.state();
        assert_eq!(after.selected_skeleton, Some("kotlin".into()));
        assert_eq!(after.skeleton_url, before.skeleton_url);
        assert_eq!(after.exec, before.exec);
        assert_eq!(after.logged_in_user_id, before.logged_in_user_id);
    }

    #[test]
    fn set_skeleton_url_touches_only_its_field() {
        let mut store = populated_store();
        let before = store.state().clone();

        store.commit(Mutation::SetSkeletonUrl(None));

        let after = store.state();
        assert_eq!(after.skeleton_url, None);
        assert_eq!(after.selected_skeleton, before.selected_skeleton);
        assert_eq!(after.exec, before.exec);
        assert_eq!(after.logged_in_user_id, before.logged_in_user_id);
    }

    #[test]
    fn login_user_replaces_user_id_only() {
        let mut store = Store::new(true);
        store.commit(Mutation::UpdateSession(SessionSnapshot {
            logged_in_user_id: Some("u1".into()),
            logged_in_display_name: Some("Ada".into()),
            logged_in_picture_url: Some("p".into()),
            logged_in_profile_url: Some("pr".into()),
            logged_in_info_only: false,
        }));

        store.commit(Mutation::LoginUser("u2".into()));

        let state = store.state();
        assert_eq!(state.logged_in_user_id, Some("u2".into()));
        assert_eq!(state.logged_in_display_name, Some("Ada".into()));
        assert_eq!(state.logged_in_picture_url, Some("p".into()));
        assert_eq!(state.logged_in_profile_url, Some("pr".into()));
        assert!(!state.logged_in_info_only);
    }

    #[test]
    fn update_session_replaces_all_session_fields() {
        let mut store = Store::new(true);
        store.commit(Mutation::SetSelectedSkeleton(Some("java-groovy".into())));

        store.commit(Mutation::UpdateSession(SessionSnapshot {
            logged_in_user_id: Some("u1".into()),
            logged_in_display_name: Some("A".into()),
            logged_in_picture_url: Some("p".into()),
            logged_in_profile_url: Some("pr".into()),
            logged_in_info_only: false,
        }));

        let state = store.state();
        assert_eq!(state.logged_in_user_id, Some("u1".into()));
        assert_eq!(state.logged_in_display_name, Some("A".into()));
        assert_eq!(state.logged_in_picture_url, Some("p".into()));
        assert_eq!(state.logged_in_profile_url, Some("pr".into()));
        assert!(!state.logged_in_info_only);
        // Selection state is not part of the session snapshot
        assert_eq!(state.selected_skeleton, Some("java-groovy".into()));
    }

    #[test]
    fn update_session_does_not_preserve_absent_fields() {
        let mut store = Store::new(true);
        store.commit(Mutation::UpdateSession(SessionSnapshot {
            logged_in_user_id: Some("u1".into()),
            logged_in_display_name: Some("A".into()),
            logged_in_picture_url: Some("p".into()),
            logged_in_profile_url: Some("pr".into()),
            logged_in_info_only: false,
        }));

        // A partial snapshot unsets everything it omits
        store.commit(Mutation::UpdateSession(SessionSnapshot {
            logged_in_user_id: Some("u1".into()),
            ..SessionSnapshot::default()
        }));

        let state = store.state();
        assert_eq!(state.logged_in_user_id, Some("u1".into()));
        assert_eq!(state.logged_in_display_name, None);
        assert_eq!(state.logged_in_picture_url, None);
        assert_eq!(state.logged_in_profile_url, None);
        assert!(state.logged_in_info_only);
    }

    #[test]
    fn login_without_session_snapshot_is_a_valid_steady_state() {
        let mut store = Store::new(true);
        store.commit(Mutation::LoginUser("u1".into()));

        let state = store.state();
        assert_eq!(state.logged_in_user_id, Some("u1".into()));
        assert_eq!(state.logged_in_display_name, None);
    }

    #[test]
    fn set_exec_is_idempotent() {
        let mut store = Store::new(true);
        store.commit(Mutation::SetExec(true));
        let once = store.state().clone();
        store.commit(Mutation::SetExec(true));
        assert_eq!(store.state(), &once);
    }

    #[test]
    fn strict_store_rejects_state_replacement() {
        let mut store = Store::new(true);
        let err = store
            .replace_state(SessionState::default())
            .expect_err("strict mode must reject out-of-band writes");
        assert_eq!(err, StoreError::StrictModeViolation);
    }

    #[test]
    fn relaxed_store_allows_state_replacement() {
        let mut store = Store::new(false);
        let replacement = SessionState {
            exec: true,
            ..SessionState::default()
        };
        store
            .replace_state(replacement.clone())
            .expect("relaxed store accepts replacement");
        assert_eq!(store.state(), &replacement);
    }

    #[test]
    fn session_snapshot_defaults_info_only_when_absent_from_json() {
        let snapshot: SessionSnapshot =
            serde_json::from_str(r#"{"logged_in_user_id":"u1"}"#).expect("valid json");
        assert!(snapshot.logged_in_info_only);
        assert_eq!(snapshot.logged_in_user_id, Some("u1".into()));
        assert_eq!(snapshot.logged_in_display_name, None);
    }
}
