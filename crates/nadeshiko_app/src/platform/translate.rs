use std::fs;
use std::path::Path;

use anyhow::Context;
use nadeshiko_engine::{render_result, SubprocessTranslator, Translator};

use super::config::PanelConfig;

/// Translates a single file and prints what the panel would show.
pub fn run(config: &PanelConfig, file: &Path) -> anyhow::Result<()> {
    let source =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    let translator = SubprocessTranslator::new(config.translator_settings());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;
    let result = runtime.block_on(translator.translate(&source));

    println!("{}", render_result(&result));
    Ok(())
}
