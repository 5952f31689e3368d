pub mod game;
pub mod normalizer;
pub mod orchestrator;

pub use game::{GameScore, ScoreError, score_ordering};
pub use normalizer::normalize;
pub use orchestrator::{
    GenerationOrchestrator, GenerationResult, OrchestrationError, OrchestratorSettings,
};
