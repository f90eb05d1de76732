//!
//! Benchmark plotter output.
//!

pub mod format;
pub mod json;

#[cfg(test)]
mod tests;

use std::path::Path;

///
/// A single artifact ready to be written.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// UTF-8 text: a report, a vector image, or a JSON dump.
    Text(String),
    /// Binary data: a raster image.
    Binary(Vec<u8>),
}

impl Output {
    ///
    /// Writes the artifact, creating the parent directory and overwriting the file.
    ///
    /// The content is flushed from memory in a single write.
    ///
    pub fn write_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Output directory {parent:?} creating: {error}")
            })?;
        }
        let content: &[u8] = match self {
            Self::Text(content) => content.as_bytes(),
            Self::Binary(content) => content.as_slice(),
        };
        std::fs::write(path, content)
            .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
        Ok(())
    }

    ///
    /// The content size in bytes.
    ///
    pub fn len(&self) -> usize {
        match self {
            Self::Text(content) => content.len(),
            Self::Binary(content) => content.len(),
        }
    }

    ///
    /// Whether the content is empty.
    ///
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for Output {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for Output {
    fn from(value: Vec<u8>) -> Self {
        Self::Binary(value)
    }
}
