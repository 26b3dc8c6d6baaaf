//! Whole-file read and write
//!
//! Inputs are memory mapped read-only. Outputs are written to a hidden temp
//! file in the target directory and renamed into place, so a failed write
//! never leaves a partial artifact behind.

use crate::error::{Result, ToolError};
use memmap2::{Mmap, MmapOptions};
use rpcid_core::StorageBackend;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A read-only mapped input file
pub struct MappedFile {
    path: PathBuf,
    // Empty files cannot be mapped
    mmap: Option<Mmap>,
}

impl MappedFile {
    /// Resolved path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for MappedFile {
    fn as_slice(&self) -> &[u8] {
        self.mmap.as_deref().unwrap_or(&[])
    }
}

impl std::fmt::Debug for MappedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappedFile")
            .field("path", &self.path)
            .field("len", &self.size())
            .finish()
    }
}

/// Map a whole regular file into memory
///
/// Fails if the path does not resolve, is not a regular file, is unreadable,
/// or is larger than `max_bytes`.
pub fn read_whole_file(path: impl AsRef<Path>, max_bytes: u64) -> Result<MappedFile> {
    let requested = path.as_ref();
    let path = fs::canonicalize(requested).map_err(|e| ToolError::io(requested, e))?;

    let metadata = fs::metadata(&path).map_err(|e| ToolError::io(&path, e))?;
    if !metadata.is_file() {
        return Err(ToolError::NotAFile(path));
    }
    if metadata.len() > max_bytes {
        return Err(ToolError::InputTooLarge {
            path,
            size: metadata.len(),
            limit: max_bytes,
        });
    }

    let file = File::open(&path).map_err(|e| ToolError::io(&path, e))?;
    let mmap = if metadata.len() == 0 {
        None
    } else {
        // SAFETY: Read-only mapping; the bytes are copied out or validated
        // before any offset derived from them is trusted
        let mmap = unsafe { MmapOptions::new().map(&file) }.map_err(|e| ToolError::io(&path, e))?;
        Some(mmap)
    };

    Ok(MappedFile { path, mmap })
}

/// Create or replace `dir/file_name` with `bytes`
///
/// `dir` must already exist. Either the complete file is in place when this
/// returns `Ok`, or the previous state of `dir/file_name` is untouched.
pub fn write_whole_file(dir: impl AsRef<Path>, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let metadata = fs::metadata(dir).map_err(|e| ToolError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(ToolError::NotADirectory(dir.to_path_buf()));
    }

    let target = dir.join(file_name);
    let temp_path = dir.join(format!(".{file_name}.tmp"));

    let written = write_temp(&temp_path, bytes)
        .and_then(|()| fs::rename(&temp_path, &target).map_err(|e| ToolError::io(&target, e)));
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written.map(|()| target)
}

fn write_temp(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| ToolError::io(temp_path, e))?;
    file.write_all(bytes)
        .map_err(|e| ToolError::io(temp_path, e))?;
    file.sync_all().map_err(|e| ToolError::io(temp_path, e))
}
