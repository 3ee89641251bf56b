//! File type detection

use std::path::Path;

/// Extensions the input layer can read; anything else is `Unknown`.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_by_extension_case_insensitively() {
        assert_eq!(FileType::from_path(Path::new("cv/Jane.PDF")), FileType::Pdf);
        assert_eq!(FileType::from_path(Path::new("notes.markdown")), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("resume.txt")), FileType::Text);
        assert_eq!(FileType::from_path(Path::new("resume.docx")), FileType::Unknown);
        assert_eq!(FileType::from_path(Path::new("README")), FileType::Unknown);
    }

    #[test]
    fn test_supported_extensions_are_all_readable() {
        for ext in SUPPORTED_EXTENSIONS {
            assert_ne!(FileType::from_extension(ext), FileType::Unknown, "{}", ext);
        }
    }
}
