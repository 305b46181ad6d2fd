use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};

use panel_logging::{panel_debug, panel_info, panel_warn};
use tempfile::NamedTempFile;
use tokio::process::Command;

use crate::sources::collect_java_sources;
use crate::{FailureKind, RecompilePolicy, Stage, TranslateError, TranslatorSettings};

/// Shown when the converter printed nothing.
pub const EMPTY_RESULT_PLACEHOLDER: &str = " ";
pub const ERROR_PREFIX: &str = "変換エラー: ";

#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translates Java source text. `Ok` carries the trimmed converter output, which may be empty.
    async fn translate(&self, source: &str) -> Result<String, TranslateError>;
}

/// Turns a translation result into the string shown in the panel.
pub fn render_result(result: &Result<String, TranslateError>) -> String {
    match result {
        Ok(text) if text.trim().is_empty() => EMPTY_RESULT_PLACEHOLDER.to_string(),
        Ok(text) => text.trim().to_string(),
        Err(err) => format!("{ERROR_PREFIX}{err}"),
    }
}

/// Runs the external converter: `javac` over its sources, then `java <entry> <input>`.
#[derive(Debug)]
pub struct SubprocessTranslator {
    settings: TranslatorSettings,
    compiled: AtomicBool,
}

impl SubprocessTranslator {
    pub fn new(settings: TranslatorSettings) -> Self {
        Self {
            settings,
            compiled: AtomicBool::new(false),
        }
    }

    fn classpath(&self) -> Result<OsString, TranslateError> {
        std::env::join_paths(&self.settings.classpath).map_err(|err| {
            TranslateError::new(
                FailureKind::Io {
                    stage: Stage::Compiling,
                },
                format!("invalid classpath entry: {err}"),
            )
        })
    }

    fn write_input(&self, source: &str) -> Result<(NamedTempFile, PathBuf), TranslateError> {
        let io_error = |err: std::io::Error| {
            TranslateError::new(
                FailureKind::Io {
                    stage: Stage::WritingInput,
                },
                err.to_string(),
            )
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix("nadeshiko-input-").suffix(".txt");
        let mut file = match &self.settings.temp_dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(io_error)?;
        file.write_all(source.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;

        // The converter runs with `base_dir` as its working directory.
        let path = std::path::absolute(file.path()).map_err(io_error)?;
        Ok((file, path))
    }

    async fn compile(&self, classpath: &OsStr) -> Result<(), TranslateError> {
        if self.settings.recompile == RecompilePolicy::Once && self.compiled.load(Ordering::Acquire)
        {
            return Ok(());
        }

        let base_dir = &self.settings.base_dir;
        let sources = collect_java_sources(base_dir).map_err(|err| {
            TranslateError::new(
                FailureKind::Io {
                    stage: Stage::ScanningSources,
                },
                err.to_string(),
            )
        })?;
        if sources.is_empty() {
            return Err(TranslateError::new(
                FailureKind::NoSources,
                format!("no .java files under {}", base_dir.display()),
            ));
        }
        panel_debug!(
            "Compiling {} converter sources in {}",
            sources.len(),
            base_dir.display()
        );

        let mut command = Command::new(&self.settings.javac);
        command
            .arg("-cp")
            .arg(classpath)
            .args(&sources)
            .current_dir(base_dir);
        self.run_stage(Stage::Compiling, command).await?;
        self.compiled.store(true, Ordering::Release);
        Ok(())
    }

    async fn run_stage(&self, stage: Stage, mut command: Command) -> Result<String, TranslateError> {
        let program = command.as_std().get_program().to_os_string();
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = command.spawn().map_err(|err| {
            TranslateError::new(
                FailureKind::Spawn { stage },
                format!("{}: {err}", program.to_string_lossy()),
            )
        })?;

        let limit = self.settings.stage_timeout;
        // Dropping the wait future on timeout drops the child, which kills it.
        let output = match tokio::time::timeout(limit, child.wait_with_output()).await {
            Ok(result) => result
                .map_err(|err| TranslateError::new(FailureKind::Io { stage }, err.to_string()))?,
            Err(_) => {
                return Err(TranslateError::new(
                    FailureKind::Timeout { stage, limit },
                    format!("{stage} timed out after {} ms", limit.as_millis()),
                ))
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if output.status.success() {
            return Ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = if stderr.trim().is_empty() {
            stdout.trim()
        } else {
            stderr.trim()
        };
        Err(TranslateError::new(
            FailureKind::ExitStatus {
                stage,
                code: output.status.code(),
            },
            format!("{stage} failed ({}): {detail}", output.status),
        ))
    }
}

#[async_trait::async_trait]
impl Translator for SubprocessTranslator {
    async fn translate(&self, source: &str) -> Result<String, TranslateError> {
        if source.trim().is_empty() {
            panel_debug!("Empty source; skipping converter");
            return Ok(String::new());
        }

        let (input, input_path) = self.write_input(source)?;
        let classpath = self.classpath()?;
        self.compile(&classpath).await?;

        let mut command = Command::new(&self.settings.java);
        command
            .arg("-cp")
            .arg(&classpath)
            .arg(&self.settings.entry_class)
            .arg(&input_path)
            .current_dir(&self.settings.base_dir);
        let output = self.run_stage(Stage::Running, command).await?;

        if let Err(err) = input.close() {
            panel_warn!("Failed to remove converter input {:?}: {}", input_path, err);
        }
        panel_info!(
            "Translated {} bytes of source into {} bytes",
            source.len(),
            output.trim().len()
        );
        Ok(output.trim().to_string())
    }
}
