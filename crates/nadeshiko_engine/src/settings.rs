use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENTRY_CLASS: &str = "JavaToNadeshikoConverter";
pub const DEFAULT_PARSER_JAR: &str = "javaparser-core-3.26.2.jar";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecompilePolicy {
    /// Compile the converter sources before every translation.
    #[default]
    Always,
    /// Compile once per process, after the first successful build reuse the classes.
    Once,
}

#[derive(Debug, Clone)]
pub struct TranslatorSettings {
    /// Directory holding the converter's `.java` sources; also the working directory.
    pub base_dir: PathBuf,
    /// Classpath entries, relative to `base_dir` unless absolute.
    pub classpath: Vec<PathBuf>,
    pub entry_class: String,
    pub javac: PathBuf,
    pub java: PathBuf,
    pub recompile: RecompilePolicy,
    /// Limit applied separately to the compile and the run step.
    pub stage_timeout: Duration,
    /// Where input files are created. `None` uses the system temp directory.
    pub temp_dir: Option<PathBuf>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            classpath: vec![PathBuf::from("."), PathBuf::from(DEFAULT_PARSER_JAR)],
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            javac: PathBuf::from("javac"),
            java: PathBuf::from("java"),
            recompile: RecompilePolicy::Always,
            stage_timeout: Duration::from_secs(30),
            temp_dir: None,
        }
    }
}
