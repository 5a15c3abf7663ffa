//! Collision-free file creation
//!
//! If `dir/stem.ext` exists, the candidates `dir/stem_1.ext`, `dir/stem_2.ext`,
//! ... are tried in order. Files are opened with `create_new`, so a file that
//! appears between the check and the write is never clobbered.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Returns the `counter`-th candidate for `path` (0 is the path itself)
pub fn numbered_path(path: &Path, counter: usize) -> PathBuf {
    if counter == 0 {
        return path.to_path_buf();
    }

    let mut name: OsString = path.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("_{}", counter));
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// Creates the first free candidate for `path` and returns it opened for writing
pub fn create_unique(path: &Path) -> io::Result<(File, PathBuf)> {
    if path.file_name().is_none() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", path.display()),
        ));
    }

    let mut counter = 0;
    loop {
        let candidate = numbered_path(path, counter);
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&candidate)
        {
            Ok(file) => return Ok((file, candidate)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => counter += 1,
            Err(e) => return Err(e),
        }
    }
}

/// Writes `bytes` to a new file at the first free candidate for `path`
///
/// Missing parent directories are created. Returns the path actually written.
/// If writing fails the new file is removed again, so the name stays free.
pub fn write_unique(path: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    ensure_parent(path)?;
    let (file, actual) = create_unique(path)?;
    fill(file, &actual, bytes)?;
    Ok(actual)
}

/// Replaces the contents of a file previously created by [`write_unique`]
///
/// The new contents go to a fresh hidden sibling (`.name.tmp`, or a numbered
/// variant if that exists) and are renamed over the target, so readers never
/// observe a half-written file and no unrelated file is touched.
pub fn replace_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut tmp_name = OsString::from(".");
    tmp_name.push(path.file_name().unwrap_or_default());
    tmp_name.push(".tmp");

    let (file, tmp_path) = create_unique(&path.with_file_name(tmp_name))?;
    fill(file, &tmp_path, bytes)?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        e
    })
}

/// Writes and syncs a file this module just created, deleting it on failure
fn fill(mut file: File, path: &Path, bytes: &[u8]) -> io::Result<()> {
    let written = file.write_all(bytes).and_then(|()| file.sync_all());
    if let Err(e) = written {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
