//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The portal keeps no sessions or tickets. The shared pieces are the
//! pacer, whose cancellation token is tied to server shutdown, and the
//! page templates parsed at startup.

use crate::services::pacer::Pacer;
use crate::views::Views;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pacer: Pacer,
    pub views: Views,
}

impl AppState {
    #[must_use]
    pub fn new(pacer: Pacer, views: Views) -> Self {
        Self { pacer, views }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
