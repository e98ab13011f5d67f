//! Article lifecycle state management: the closed status/action enums and
//! the transition engine that applies them.

pub mod engine;
pub mod states;

pub use engine::{StatusTransitionEngine, TransitionOutcome};
pub use states::{ArticleStatus, PublishAction};
