use std::fmt;
use std::time::Duration;

pub type RequestId = u64;
pub type TimerId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    WritingInput,
    ScanningSources,
    Compiling,
    Running,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::WritingInput => write!(f, "writing input"),
            Stage::ScanningSources => write!(f, "scanning sources"),
            Stage::Compiling => write!(f, "compiling"),
            Stage::Running => write!(f, "running"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TranslationCompleted {
        request_id: RequestId,
        result: Result<String, TranslateError>,
    },
    TimerFired {
        timer_id: TimerId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TranslateError {
    pub kind: FailureKind,
    pub message: String,
}

impl TranslateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    Io { stage: Stage },
    NoSources,
    Spawn { stage: Stage },
    ExitStatus { stage: Stage, code: Option<i32> },
    Timeout { stage: Stage, limit: Duration },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Io { stage } => write!(f, "io error while {stage}"),
            FailureKind::NoSources => write!(f, "no java sources"),
            FailureKind::Spawn { stage } => write!(f, "failed to spawn process while {stage}"),
            FailureKind::ExitStatus { stage, code } => match code {
                Some(code) => write!(f, "exit code {code} while {stage}"),
                None => write!(f, "terminated by signal while {stage}"),
            },
            FailureKind::Timeout { stage, limit } => {
                write!(f, "timed out after {}ms while {stage}", limit.as_millis())
            }
        }
    }
}
