//! Application orchestration layer
//!
//! This module coordinates between routing, the state store, and the
//! mounted view. It owns the shared session record and drives navigation.

pub mod controller;
pub mod store;
