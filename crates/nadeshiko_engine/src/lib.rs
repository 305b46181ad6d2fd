//! Nadeshiko engine: translation subprocesses, debounce timers, and effect execution.
mod engine;
mod settings;
mod sink;
mod sources;
mod translate;
mod types;

pub use engine::EngineHandle;
pub use settings::{RecompilePolicy, TranslatorSettings, DEFAULT_ENTRY_CLASS, DEFAULT_PARSER_JAR};
pub use sink::{ChannelEventSink, EventSink};
pub use sources::collect_java_sources;
pub use translate::{
    render_result, SubprocessTranslator, Translator, EMPTY_RESULT_PLACEHOLDER, ERROR_PREFIX,
};
pub use types::{EngineEvent, FailureKind, RequestId, Stage, TimerId, TranslateError};
