//! Core trait abstractions for the citation counter.
//!
//! These traits define the interfaces the host implements to provide
//! document storage and user notifications.

pub mod notifier;
pub mod store;
