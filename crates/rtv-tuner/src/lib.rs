//! # rtv-tuner
//!
//! The auto-tuner: an adapter for the external generative naming service.
//!
//! Given raw goal text, [`TunerClient`] asks a generative-language endpoint
//! for a 1970s TV listing (title, synopsis, genre). The adapter implements
//! [`rtv_session::ProgramNamer`], which is infallible by contract: every
//! failure mode resolves to one of two deterministic fallback listings.
//!
//! - No API key configured → the listing is the raw input filed under
//!   Documentary, no network call at all.
//! - Configured but the call errors (network, status, malformed body,
//!   unknown genre) → the input filed under News with the
//!   interrupted-broadcast blurb.

pub mod client;
pub mod config;
pub mod error;

pub use client::{fallback_interrupted, fallback_unconfigured, TunerClient};
pub use config::TunerConfig;
pub use error::TunerError;
