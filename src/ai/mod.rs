//! Turn decisions: which push to play on push turns and which path to walk
//! on move turns.

mod deadline;
pub mod move_ai;
pub mod push_ai;

pub use deadline::Deadline;
pub use move_ai::{BfsTree, MoveAi};
pub use push_ai::{CandidateScore, Evaluation, PushAi, DEFAULT_PUSH};
