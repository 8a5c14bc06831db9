// namer.rs — The external auto-naming capability.
//
// Given the user's raw goal text, a namer produces the retro listing shown
// in the guide. The trait is infallible by contract: adapters must resolve
// every failure (no configuration, network error, malformed response) to a
// deterministic fallback listing, so the create flow always completes.

use std::future::Future;

use serde::{Deserialize, Serialize};

use rtv_goal::Category;

/// A generated channel listing: what the naming service hands back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramListing {
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// The auto-naming collaborator.
///
/// Implemented over HTTP by `rtv-tuner`; tests implement it inline.
pub trait ProgramNamer: Send + Sync {
    /// Turn raw goal text into a retro TV listing. Never fails — adapters
    /// fall back to a deterministic listing instead.
    fn name_program(&self, input: &str) -> impl Future<Output = ProgramListing> + Send;
}
