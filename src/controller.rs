use crate::core::{CardTransform, DeckState, DeckTuning, GestureOutcome};
use crate::models::{Candidate, Decision, MatchFilters};
use crate::services::MatchGateway;

/// Out-of-band events the presentation layer should react to.
#[derive(Debug, Clone)]
pub enum DeckSignal {
    /// The liked candidate liked back.
    MutualMatch(Candidate),
}

/// Result of releasing the top card, after any decision has been resolved.
#[derive(Debug, Clone)]
pub enum SwipeOutcome {
    /// No gesture was active, or the decision was discarded as stale.
    Ignored,
    /// Inside the threshold: animate the card back to neutral.
    SpringBack,
    /// The card flew off. `exit_velocity` biases the fly-off animation
    /// only; the decision itself came from displacement alone.
    Swiped {
        decision: Decision,
        exit_velocity: f64,
        signal: Option<DeckSignal>,
    },
}

/// Drives the swipe deck: owns the [`DeckState`] reducer and a candidate
/// fetch gateway, funnelling both the gesture path and the manual
/// like/skip buttons through a single decision choke point.
///
/// Decisions advance the deck optimistically — the next card shows
/// immediately, and a failed remote write is logged, never rolled back.
pub struct SwipeDeckController<G> {
    deck: DeckState,
    gateway: G,
    filters: MatchFilters,
}

impl<G: MatchGateway> SwipeDeckController<G> {
    pub fn new(gateway: G, tuning: DeckTuning) -> Self {
        Self {
            deck: DeckState::new(tuning),
            gateway,
            filters: MatchFilters::default(),
        }
    }

    pub fn with_filters(gateway: G, tuning: DeckTuning, filters: MatchFilters) -> Self {
        Self {
            deck: DeckState::new(tuning),
            gateway,
            filters,
        }
    }

    /// Read access for the presentation layer: phase, top card, stack.
    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn filters(&self) -> &MatchFilters {
        &self.filters
    }

    /// New filters apply from the next fetch onward.
    pub fn set_filters(&mut self, filters: MatchFilters) {
        self.filters = filters;
    }

    /// Load the first candidate batch, superseding any fetch in flight.
    /// Also the manual-reload entry point from the error and
    /// no-more-candidates states.
    pub async fn load_initial_candidates(&mut self) {
        let Some(ticket) = self.deck.begin_fetch(true) else {
            return;
        };
        let outcome = self
            .gateway
            .fetch_candidates(&self.filters)
            .await
            .map_err(|e| e.to_string());
        self.deck.apply_fetch(ticket, outcome);
    }

    /// Start tracking a drag on the top card.
    pub fn begin_gesture(&mut self) -> bool {
        self.deck.begin_gesture()
    }

    /// Forward pointer movement; returns the card transform to render.
    pub fn update_gesture(&mut self, dx: f64, dy: f64) -> Option<CardTransform> {
        self.deck.update_gesture(dx, dy)
    }

    /// Release the top card and resolve any resulting decision.
    pub async fn end_gesture(&mut self, dx: f64, dy: f64, velocity_x: f64) -> SwipeOutcome {
        match self.deck.end_gesture(dx, dy, velocity_x) {
            GestureOutcome::Ignored => SwipeOutcome::Ignored,
            GestureOutcome::SpringBack => SwipeOutcome::SpringBack,
            GestureOutcome::Decided {
                candidate_id,
                decision,
                exit_velocity,
            } => match self.resolve_decision(&candidate_id, decision).await {
                Some(signal_slot) => SwipeOutcome::Swiped {
                    decision,
                    exit_velocity,
                    signal: signal_slot,
                },
                None => SwipeOutcome::Ignored,
            },
        }
    }

    /// Explicit like/skip button press on the current top card. Same
    /// downstream effects as a gesture-derived decision.
    pub async fn manual_decision(&mut self, decision: Decision) -> Option<DeckSignal> {
        let candidate_id = self.deck.top().map(|c| c.id.clone())?;
        self.resolve_decision(&candidate_id, decision).await?
    }

    /// The single choke point. Returns `None` when the decision was
    /// discarded (stale or double-fired); otherwise `Some(signal)` where
    /// the signal reports a mutual match.
    async fn resolve_decision(
        &mut self,
        candidate_id: &str,
        decision: Decision,
    ) -> Option<Option<DeckSignal>> {
        // Optimistic advance first: the deck moves forward even if every
        // remote call below fails.
        let committed = self.deck.commit_decision(candidate_id, decision)?;
        let candidate = committed.candidate;

        let signal = match decision {
            Decision::Accept => self.send_like(&candidate).await,
            Decision::Reject => {
                if let Err(e) = self.gateway.dislike(&candidate.id).await {
                    tracing::warn!("dislike for {} not registered: {}", candidate.id, e);
                }
                None
            }
        };

        if committed.exhausted {
            self.replenish().await;
        }

        Some(signal)
    }

    async fn send_like(&self, candidate: &Candidate) -> Option<DeckSignal> {
        let inline_status = match self.gateway.like(&candidate.id).await {
            Ok(ack) => ack.is_match,
            Err(e) => {
                tracing::warn!("like for {} not registered: {}", candidate.id, e);
                // The deck has already moved on; still worth asking whether
                // an earlier like of ours got reciprocated.
                None
            }
        };

        let is_match = match inline_status {
            Some(status) => status,
            None => match self.gateway.check_match(&candidate.id).await {
                Ok(status) => status,
                Err(e) => {
                    tracing::warn!("match check for {} failed: {}", candidate.id, e);
                    false
                }
            },
        };

        if is_match {
            tracing::info!("mutual match with {}", candidate.name);
            Some(DeckSignal::MutualMatch(candidate.clone()))
        } else {
            None
        }
    }

    /// Fetch a fresh batch once the queue runs out. The deck's fetch guard
    /// makes overlapping triggers no-ops, so rapid consecutive decisions
    /// near exhaustion cause exactly one fetch.
    pub async fn replenish(&mut self) {
        let Some(ticket) = self.deck.begin_fetch(false) else {
            tracing::debug!("replenish skipped: fetch already in flight");
            return;
        };
        let outcome = self
            .gateway
            .fetch_candidates(&self.filters)
            .await
            .map_err(|e| e.to_string());
        self.deck.apply_fetch(ticket, outcome);
    }
}
