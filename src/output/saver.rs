//! Saving arbitrary text content without overwriting anything

use crate::config::DEFAULT_ENCODING;
use crate::output::encoding::{encode_text, lookup_encoding};
use crate::output::naming::write_unique;
use crate::output::traits::OutputResult;
use crate::SaveError;
use std::path::{Path, PathBuf};

/// Filename used when none is given
pub const DEFAULT_FILENAME: &str = "output.txt";

/// Saves text to a directory, picking a fresh name on collision
///
/// # Example
///
/// ```no_run
/// use page_gleaner::output::FileSaver;
/// use std::path::Path;
///
/// let saver = FileSaver::new("utf-8").unwrap();
/// let first = saver.save("Hello", Some(Path::new("out")), Some("greeting.txt")).unwrap();
/// let second = saver.save("Hello", Some(Path::new("out")), Some("greeting.txt")).unwrap();
/// assert_ne!(first, second); // out/greeting.txt, out/greeting_1.txt
/// ```
#[derive(Debug, Clone)]
pub struct FileSaver {
    encoding: String,
}

impl FileSaver {
    /// Creates a saver that writes with the given encoding label
    pub fn new(encoding: &str) -> OutputResult<Self> {
        lookup_encoding(encoding)?;
        Ok(Self {
            encoding: encoding.to_string(),
        })
    }

    /// Writes `content` and returns the path it was saved at
    ///
    /// * `directory` - defaults to the current directory; created if missing
    /// * `filename` - defaults to `output.txt`
    pub fn save(
        &self,
        content: &str,
        directory: Option<&Path>,
        filename: Option<&str>,
    ) -> OutputResult<PathBuf> {
        if content.is_empty() {
            tracing::error!("Content to save cannot be empty");
            return Err(SaveError::EmptyContent);
        }

        let directory = match directory {
            Some(dir) => dir.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let filename = filename
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FILENAME);

        let bytes = encode_text(content, &self.encoding)?;

        std::fs::create_dir_all(&directory)?;
        let path = write_unique(&directory.join(filename), &bytes).map_err(|e| {
            tracing::error!("An error occurred while saving the file: {}", e);
            e
        })?;

        tracing::info!("File saved successfully at: {}", path.display());
        Ok(path)
    }
}

impl Default for FileSaver {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}
