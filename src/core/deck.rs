use crate::core::gesture::{CardTransform, DeckTuning, GestureState};
use crate::core::queue::CandidateQueue;
use crate::models::{Candidate, Decision};

/// What the deck is currently showing.
///
/// `Exhausted` is the "no more candidates" terminal state (a successful
/// fetch returned zero profiles); `Failed` carries the message of the last
/// fetch error. Neither retries automatically — the host offers a manual
/// reload affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckPhase {
    Loading,
    Ready,
    Exhausted,
    Failed(String),
}

/// Proof that a fetch was started; pairs a result with the fetch it
/// answers. A result whose ticket no longer matches the deck's epoch is
/// from a superseded fetch and gets discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
}

/// Result of releasing the top card.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// No gesture was being tracked.
    Ignored,
    /// Displacement stayed inside the threshold; animate back to neutral.
    SpringBack,
    /// Threshold crossed: a decision for the card identified at release
    /// time. `exit_velocity` only biases the fly-off animation.
    Decided {
        candidate_id: String,
        decision: Decision,
        exit_velocity: f64,
    },
}

/// An optimistic cursor advance that actually happened.
#[derive(Debug, Clone)]
pub struct CommittedDecision {
    pub candidate: Candidate,
    pub decision: Decision,
    /// The cursor reached the end of the queue; replenishment is due.
    pub exhausted: bool,
}

/// The swipe deck state machine.
///
/// Every transition is a synchronous method call, so the whole interaction
/// loop is testable without a gesture system or a network. Asynchronous
/// work (fetching, like/dislike calls) lives in the controller, which talks
/// to this struct through `begin_fetch`/`apply_fetch` and
/// `commit_decision`.
#[derive(Debug)]
pub struct DeckState {
    queue: CandidateQueue,
    gesture: Option<GestureState>,
    tuning: DeckTuning,
    phase: DeckPhase,
    resolving: bool,
    fetching: bool,
    fetch_epoch: u64,
}

impl DeckState {
    pub fn new(tuning: DeckTuning) -> Self {
        Self {
            queue: CandidateQueue::new(),
            gesture: None,
            tuning,
            phase: DeckPhase::Loading,
            resolving: false,
            fetching: false,
            fetch_epoch: 0,
        }
    }

    pub fn phase(&self) -> &DeckPhase {
        &self.phase
    }

    pub fn tuning(&self) -> &DeckTuning {
        &self.tuning
    }

    /// The top card, if any.
    pub fn top(&self) -> Option<&Candidate> {
        self.queue.current()
    }

    /// The visible card stack (top card first), sized by the tuning.
    pub fn stack(&self) -> &[Candidate] {
        self.queue.upcoming(self.tuning.stack_depth)
    }

    pub fn remaining(&self) -> usize {
        self.queue.remaining()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref()
    }

    /// Start tracking a drag on the top card. No-op while the queue is
    /// exhausted, a fetch has emptied the deck, or a decision commit is in
    /// its synchronous window.
    pub fn begin_gesture(&mut self) -> bool {
        if self.resolving || self.phase != DeckPhase::Ready || self.queue.is_exhausted() {
            return false;
        }
        self.gesture = Some(GestureState::default());
        true
    }

    /// Record pointer movement. Pure state update: never touches the queue
    /// or triggers remote work. Returns the derived card transform for the
    /// presentation layer, or `None` when no gesture is active.
    pub fn update_gesture(&mut self, dx: f64, dy: f64) -> Option<CardTransform> {
        let gesture = self.gesture.as_mut()?;
        gesture.dx = dx;
        gesture.dy = dy;
        Some(CardTransform::for_gesture(gesture, &self.tuning))
    }

    /// Release the top card. The gesture is consumed whatever the outcome;
    /// the decision rule sees only the final displacement, never velocity.
    pub fn end_gesture(&mut self, dx: f64, _dy: f64, velocity_x: f64) -> GestureOutcome {
        if self.gesture.take().is_none() {
            return GestureOutcome::Ignored;
        }

        let Some(top) = self.queue.current() else {
            return GestureOutcome::Ignored;
        };

        match crate::core::gesture::decide(dx, self.tuning.threshold_px()) {
            Some(decision) => GestureOutcome::Decided {
                candidate_id: top.id.clone(),
                decision,
                exit_velocity: velocity_x,
            },
            None => GestureOutcome::SpringBack,
        }
    }

    /// The optimistic advance: move past `candidate_id` exactly once.
    ///
    /// Discards the commit when the id no longer names the top card (a
    /// stale double-fire: gesture-end racing a button press, or a fast
    /// double-tap) or when invoked re-entrantly from a presentation
    /// callback during the synchronous window.
    pub fn commit_decision(
        &mut self,
        candidate_id: &str,
        decision: Decision,
    ) -> Option<CommittedDecision> {
        if self.resolving {
            tracing::debug!("decision for {} ignored: commit in progress", candidate_id);
            return None;
        }
        if self.phase != DeckPhase::Ready {
            return None;
        }
        let top = self.queue.current()?;
        if top.id != candidate_id {
            tracing::debug!(
                "stale decision for {} discarded (top card is {})",
                candidate_id,
                top.id
            );
            return None;
        }

        self.resolving = true;
        let candidate = top.clone();
        self.queue.advance();
        self.gesture = None;
        let exhausted = self.queue.is_exhausted();
        self.resolving = false;

        Some(CommittedDecision {
            candidate,
            decision,
            exhausted,
        })
    }

    /// Mark a fetch as in flight and hand back its ticket.
    ///
    /// While one fetch is outstanding further triggers return `None`, which
    /// makes replenishment idempotent under rapid consecutive decisions.
    /// `force` (manual reload) supersedes the outstanding fetch instead:
    /// its eventual result will carry a stale ticket and be dropped.
    pub fn begin_fetch(&mut self, force: bool) -> Option<FetchTicket> {
        if self.fetching && !force {
            return None;
        }
        self.fetching = true;
        self.fetch_epoch += 1;
        if self.queue.is_exhausted() {
            self.phase = DeckPhase::Loading;
        }
        Some(FetchTicket {
            epoch: self.fetch_epoch,
        })
    }

    /// Apply a fetch result.
    ///
    /// A success replaces the queue and resets the cursor; zero candidates
    /// is the `Exhausted` terminal state, distinct from failure. An error
    /// becomes `Failed` only when there is nothing left to show — cards
    /// already on the deck keep being served.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: Result<Vec<Candidate>, String>) {
        if ticket.epoch != self.fetch_epoch {
            tracing::debug!(
                "stale fetch result discarded (epoch {} != {})",
                ticket.epoch,
                self.fetch_epoch
            );
            return;
        }
        self.fetching = false;

        match outcome {
            Ok(batch) if batch.is_empty() => {
                self.queue.replace(Vec::new());
                self.phase = DeckPhase::Exhausted;
            }
            Ok(batch) => {
                tracing::debug!("deck replenished with {} candidates", batch.len());
                self.queue.replace(batch);
                self.gesture = None;
                self.phase = DeckPhase::Ready;
            }
            Err(message) => {
                if self.queue.is_exhausted() {
                    self.phase = DeckPhase::Failed(message);
                } else {
                    tracing::warn!("fetch failed with cards still on deck: {}", message);
                    self.phase = DeckPhase::Ready;
                }
            }
        }
    }
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new(DeckTuning::default())
    }
}
