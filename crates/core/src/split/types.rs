use std::path::Path;

/// A source file read from disk, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as given on the command line.
    pub path: String,
    /// Full text content of the file.
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Final path component, falling back to the whole path when there is none.
    pub fn file_name(&self) -> &str {
        Path::new(&self.path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.path)
    }
}

/// One file recovered from the model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitFile {
    /// File name derived from the segment's leading `//` comment.
    pub name: String,
    /// Segment text, header comment line included.
    pub content: String,
}
