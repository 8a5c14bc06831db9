//! # rtv-goal
//!
//! Goal records and the channel lineup store for RetroVision.
//!
//! A [`Goal`] is one trackable objective rendered as a TV channel: a title,
//! a guide-style description, a broadcast [`Category`], and step-counted
//! progress toward a numeric target. The [`GoalStore`] is the ordered,
//! append-only lineup the session tunes through.
//!
//! ## Key components
//!
//! - [`Goal`] — one channel: identity, listing text, step progress
//! - [`Category`] — the fixed broadcast genre enumeration
//! - [`GoalStore`] — ordered in-memory lineup (append and progress only)
//! - [`ProgressUpdate`] — what a progress mutation observably did

pub mod error;
pub mod goal;
pub mod store;

pub use error::GoalError;
pub use goal::{Category, Goal, UnknownCategory};
pub use store::{GoalStore, ProgressUpdate};
