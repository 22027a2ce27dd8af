use crate::error::SessionResult;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for exported level JSON.
///
/// A browser front end implements this as a download; [`DirectorySink`]
/// writes files.
pub trait ExportSink {
    /// Stores `json` under `file_name`.
    fn write_document(&mut self, file_name: &str, json: &str) -> SessionResult<()>;
}

/// Writes exported documents into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirectorySink {
    fn write_document(&mut self, file_name: &str, json: &str) -> SessionResult<()> {
        let path = self.dir.join(file_name);
        std::fs::write(&path, json)?;
        info!("Wrote level to {:?}", path);
        self.written.push(path);
        Ok(())
    }
}
