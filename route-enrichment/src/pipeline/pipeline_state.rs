use std::fmt::Display;

/// stages of one enrichment run. `Failed` is reachable from every stage
/// after `Idle`; `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Idle,
    Geocoding,
    Routing,
    Aggregating,
    Persisting,
    Done,
    Failed,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Failed)
    }

    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use PipelineState as S;
        match (self, next) {
            (S::Idle, S::Geocoding) => true,
            (S::Geocoding, S::Routing) => true,
            (S::Routing, S::Aggregating) => true,
            (S::Aggregating, S::Persisting) => true,
            (S::Persisting, S::Done) => true,
            (S::Idle, S::Failed) => false,
            (current, S::Failed) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PipelineState::Idle => "idle",
            PipelineState::Geocoding => "geocoding",
            PipelineState::Routing => "routing",
            PipelineState::Aggregating => "aggregating",
            PipelineState::Persisting => "persisting",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        write!(f, "{s}")
    }
}
