//! Delivery of exported files.

use super::error::ExportResult;
use std::path::{Path, PathBuf};

/// Final destination of an exported file
pub trait DownloadSink {
    /// Store `bytes` under (a name derived from) `filename`; returns the path
    fn deliver(&self, filename: &str, bytes: &[u8]) -> ExportResult<PathBuf>;
}

/// Writes into a directory, like a browser download. Existing files are
/// never overwritten: `name (1).ext`, `name (2).ext`, ... are tried instead.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's downloads directory, or the working directory
    pub fn downloads() -> Self {
        Self::new(dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn free_path(&self, filename: &str) -> PathBuf {
        let candidate = self.dir.join(filename);
        if !candidate.exists() {
            return candidate;
        }

        let path = Path::new(filename);
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(filename);
        let ext = path.extension().and_then(|s| s.to_str());
        (1..)
            .map(|n| {
                let name = match ext {
                    Some(ext) => format!("{} ({}).{}", stem, n, ext),
                    None => format!("{} ({})", stem, n),
                };
                self.dir.join(name)
            })
            .find(|p| !p.exists())
            .unwrap_or(candidate)
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, filename: &str, bytes: &[u8]) -> ExportResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.free_path(filename);
        std::fs::write(&path, bytes)?;
        Ok(path)
    }
}
