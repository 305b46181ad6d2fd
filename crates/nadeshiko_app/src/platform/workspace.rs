//! Files tracked by `watch`, standing in for the host's editor tabs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nadeshiko_core::{Document, JAVA_LANGUAGE_ID};
use panel_logging::panel_warn;

pub fn language_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("java") => JAVA_LANGUAGE_ID,
        _ => "plaintext",
    }
}

#[derive(Debug)]
pub struct Workspace {
    files: Vec<PathBuf>,
    active: usize,
}

impl Workspace {
    /// Tracks `files` by canonical path; each must exist. The first is active.
    pub fn open(files: Vec<PathBuf>) -> io::Result<Self> {
        let files = files
            .iter()
            .map(|path| {
                fs::canonicalize(path).map_err(|err| {
                    io::Error::new(err.kind(), format!("{}: {err}", path.display()))
                })
            })
            .collect::<io::Result<Vec<_>>>()?;
        Ok(Self { files, active: 0 })
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn active_path(&self) -> Option<&Path> {
        self.files.get(self.active).map(PathBuf::as_path)
    }

    /// Reads the active file. `None` if it cannot be read, like a closed editor.
    pub fn active_document(&self) -> Option<Document> {
        self.active_path().and_then(read_document)
    }

    /// Moves to the next file (wrapping) and returns its document.
    pub fn cycle(&mut self) -> Option<Document> {
        if !self.files.is_empty() {
            self.active = (self.active + 1) % self.files.len();
        }
        self.active_document()
    }

    /// Re-reads `path` if it is tracked.
    pub fn document_for(&self, path: &Path) -> Option<Document> {
        let tracked = self.files.iter().find(|file| file.as_path() == path)?;
        read_document(tracked)
    }
}

fn read_document(path: &Path) -> Option<Document> {
    match fs::read_to_string(path) {
        Ok(text) => Some(Document::new(
            path.display().to_string(),
            language_for(path),
            text,
        )),
        Err(err) => {
            panel_warn!("Failed to read {:?}: {}", path, err);
            None
        }
    }
}
