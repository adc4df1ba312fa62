use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::errors::GenError;

/// Create `dir` and any missing parents.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<(), GenError> {
    fs::create_dir_all(dir).map_err(|e| GenError::io(dir, e))
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
/// Returns an error if the file is missing or not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, GenError> {
    fs::read_to_string(path).map_err(|e| GenError::io(path, e))
}

/// Regular files directly under `dir`, in directory listing order.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, GenError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| GenError::io(dir, e))? {
        let entry = entry.map_err(|e| GenError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Write a file atomically: `body` writes into a temp file created next to
/// `dest`, which is then persisted over `dest`.
///
/// Missing parent directories are created.
///
/// # Errors
/// Returns the first error raised by `body`, or an I/O error if the temp
/// file cannot be created, flushed or persisted.
pub fn write_atomic<T, F>(dest: &Path, body: F) -> Result<T, GenError>
where
    F: FnOnce(&mut BufWriter<&mut File>) -> Result<T, GenError>,
{
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;
    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| GenError::io(parent, e))?;
    let out = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let out = body(&mut writer)?;
        writer.flush().map_err(|e| GenError::io(dest, e))?;
        out
    };
    persist(tmp, dest)?;
    Ok(out)
}

// Windows can hold the destination briefly after a previous write.
fn persist(mut tmp: NamedTempFile, dest: &Path) -> Result<(), GenError> {
    let mut last_err: Option<io::Error> = None;
    for attempt in 0..5 {
        if dest.exists() {
            if let Err(e) = fs::remove_file(dest) {
                last_err = Some(e);
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
                continue;
            }
        }
        match tmp.persist(dest) {
            Ok(_) => return Ok(()),
            Err(pe) => {
                last_err = Some(pe.error);
                tmp = pe.file;
                std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
            }
        }
    }
    let err = last_err.unwrap_or_else(|| io::Error::other("failed to persist output file"));
    Err(GenError::io(dest, err))
}
