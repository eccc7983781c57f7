use crate::scenario::ScenarioKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{codec} failed to encode: {message}")]
    Encode { codec: &'static str, message: String },
    #[error("{codec} failed to decode: {message}")]
    Decode { codec: &'static str, message: String },
}

impl CodecError {
    pub fn encode(codec: &'static str, err: impl std::fmt::Display) -> Self {
        CodecError::Encode {
            codec,
            message: err.to_string(),
        }
    }

    pub fn decode(codec: &'static str, err: impl std::fmt::Display) -> Self {
        CodecError::Decode {
            codec,
            message: err.to_string(),
        }
    }
}

/// Conditions that abort a benchmark run. None of them are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    #[error("encode failure in {scenario} on iteration {iteration}: {source}")]
    EncodeFailure {
        scenario: ScenarioKind,
        iteration: u64,
        source: CodecError,
    },
    #[error("unexpected decode failure in {scenario} on iteration {iteration}: {source}")]
    UnexpectedDecodeFailure {
        scenario: ScenarioKind,
        iteration: u64,
        source: CodecError,
    },
    #[error("unexpected decode success in {scenario} on iteration {iteration}")]
    UnexpectedDecodeSuccess { scenario: ScenarioKind, iteration: u64 },
    #[error("round trip mismatch in {scenario} on iteration {iteration}")]
    RoundTripMismatch { scenario: ScenarioKind, iteration: u64 },
    #[error("invalid budget: {0}")]
    InvalidBudget(String),
    #[error("worker {0} panicked")]
    WorkerPanicked(usize),
    #[error("run already executed")]
    AlreadyExecuted,
}

impl BenchError {
    pub fn iteration(&self) -> Option<u64> {
        match self {
            BenchError::EncodeFailure { iteration, .. }
            | BenchError::UnexpectedDecodeFailure { iteration, .. }
            | BenchError::UnexpectedDecodeSuccess { iteration, .. }
            | BenchError::RoundTripMismatch { iteration, .. } => Some(*iteration),
            BenchError::InvalidBudget(_)
            | BenchError::WorkerPanicked(_)
            | BenchError::AlreadyExecuted => None,
        }
    }
}
