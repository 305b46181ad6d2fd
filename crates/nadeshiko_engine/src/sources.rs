use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collects every `.java` file below `base_dir`, as paths relative to it, sorted.
pub fn collect_java_sources(base_dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut sources = Vec::new();
    for entry in WalkDir::new(base_dir).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "java") {
            let relative = path.strip_prefix(base_dir).unwrap_or(path);
            sources.push(relative.to_path_buf());
        }
    }
    sources.sort();
    Ok(sources)
}
