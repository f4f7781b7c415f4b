// Core deck state machine exports
pub mod deck;
pub mod gesture;
pub mod queue;

pub use deck::{CommittedDecision, DeckPhase, DeckState, FetchTicket, GestureOutcome};
pub use gesture::{accept_opacity, decide, reject_opacity, rotation_deg, CardTransform, DeckTuning, GestureState};
pub use queue::CandidateQueue;
