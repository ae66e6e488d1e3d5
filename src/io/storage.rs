use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::Task;

/// Error type for task-file I/O
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read and parse the task file. Strict: any failure is returned to the
/// caller. Most callers want [`load_tasks`] instead.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| StorageError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| StorageError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the task list without ever failing the caller.
/// A missing file is a normal first run and yields an empty list. An
/// unparseable file is backed up as `<file>.bak` so the data survives, then
/// replaced by an empty list with a warning on stderr.
pub fn load_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }
    match read_tasks(path) {
        Ok(tasks) => tasks,
        Err(StorageError::Parse { source, .. }) => {
            let bak = bak_path(path);
            let _ = fs::copy(path, &bak);
            eprintln!(
                "warning: could not parse {} (backed up as {}): {}",
                path.display(),
                bak.display(),
                source
            );
            Vec::new()
        }
        Err(e) => {
            eprintln!("warning: {}", e);
            Vec::new()
        }
    }
}

/// Serialize the full list as pretty JSON and replace the file atomically,
/// creating parent directories as needed.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), StorageError> {
    let mut json = serde_json::to_string_pretty(tasks)?;
    json.push('\n');
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| StorageError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    atomic_write(path, json.as_bytes()).map_err(|e| StorageError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write content to a temp file in the same directory, then rename over the
/// target. The file on disk is always either the old or the new content.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// `storage.json` -> `storage.json.bak`
fn bak_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}
