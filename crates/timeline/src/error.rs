use crate::year::Year;

/// Errors raised while configuring or driving the timeline
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("invalid year range: min {min} is greater than max {max}")]
    InvalidRange { min: Year, max: Year },
    #[error("step must be at least 1")]
    InvalidStep,
    #[error("step {step} does not divide the range {min}..={max}")]
    StepMisaligned { step: Year, min: Year, max: Year },
    #[error("playback interval must be between 1 and {max} ms")]
    InvalidInterval { max: u32 },
    #[error("initial year {year} is outside {min}..={max}")]
    InitialOutOfRange { year: Year, min: Year, max: Year },
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("scheduler error: {0}")]
    Scheduler(String),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
