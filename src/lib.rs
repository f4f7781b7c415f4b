//! ESPE Connect - Swipe-deck matching engine and API client for the ESPE
//! Connect campus app
//!
//! The crate has two halves: a synchronous swipe-deck state machine
//! (gesture tracking, threshold decisions, optimistic queue advancement,
//! replenish-on-exhaustion) and thin typed HTTP clients for the ESPE
//! Connect REST backend (matches, posts, promotions, banners, auth,
//! profile). Rendering is the host's job; the engine exposes derived card
//! transforms, a deck phase, and mutual-match signals.

pub mod config;
pub mod controller;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Settings;
pub use controller::{DeckSignal, SwipeDeckController, SwipeOutcome};
pub use core::{CardTransform, DeckPhase, DeckState, DeckTuning, GestureOutcome};
pub use models::{Candidate, Decision, MatchFilters};
pub use services::{ApiClient, ApiError, MatchClient, MatchGateway};

/// Initialize tracing for hosts that don't bring their own subscriber.
///
/// `RUST_LOG` overrides the configured level.
pub fn init_logging(settings: &config::LoggingSettings) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.level.clone()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if settings.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let tuning = DeckTuning::default();
        assert!(tuning.threshold_px() > 0.0);
        assert_eq!(core::decide(0.0, tuning.threshold_px()), None);
    }
}
