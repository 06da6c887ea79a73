//! Download payloads for a rendered prompt.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use seoprompt_core::RenderedPrompt;

use crate::filename::sanitize_file_stem;

#[derive(thiserror::Error, Debug)]
pub enum DownloadError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output directory {path} is not usable: {reason}")]
    InvalidDirectory { path: PathBuf, reason: String },

    #[error("Unknown download format: {0}")]
    UnknownFormat(String),
}

/// File flavor a rendered prompt can be saved as.
///
/// Both carry the same bytes; only the extension and media type differ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DownloadFormat {
    Markdown,
    PlainText,
}

impl DownloadFormat {
    /// Markdown first, then plain text.
    pub const ALL: [DownloadFormat; 2] = [DownloadFormat::Markdown, DownloadFormat::PlainText];

    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Markdown => "md",
            DownloadFormat::PlainText => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DownloadFormat::Markdown => "text/markdown",
            DownloadFormat::PlainText => "text/plain",
        }
    }

    /// Button label on the form.
    pub fn label(&self) -> &'static str {
        match self {
            DownloadFormat::Markdown => "MD 파일 저장",
            DownloadFormat::PlainText => "TXT 파일 저장",
        }
    }

    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", sanitize_file_stem(stem), self.extension())
    }

    /// Parse a format name: `md`/`markdown` or `txt`/`text`/`plain`.
    pub fn parse(name: &str) -> Result<Self, DownloadError> {
        match name.trim().to_lowercase().as_str() {
            "md" | "markdown" => Ok(DownloadFormat::Markdown),
            "txt" | "text" | "plain" => Ok(DownloadFormat::PlainText),
            other => Err(DownloadError::UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// One downloadable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub format: DownloadFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(format: DownloadFormat, prompt: &RenderedPrompt, file_stem: &str) -> Self {
        Self {
            format,
            file_name: format.file_name(file_stem),
            mime_type: format.mime_type(),
            bytes: prompt.as_bytes().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Build both downloads for a rendered prompt, Markdown first.
pub fn downloads_for(prompt: &RenderedPrompt, file_stem: &str) -> Vec<Download> {
    DownloadFormat::ALL
        .iter()
        .map(|format| Download::new(*format, prompt, file_stem))
        .collect()
}

/// Write a download into `dir`, replacing any file of the same name.
pub async fn write_download(download: &Download, dir: &Path) -> Result<PathBuf, DownloadError> {
    let path = dir.join(&download.file_name);

    tokio::fs::write(&path, &download.bytes)
        .await
        .map_err(|source| DownloadError::Write {
            path: path.clone(),
            source,
        })?;

    log::debug!(
        "Wrote {} ({} bytes, {})",
        path.display(),
        download.len(),
        download.mime_type
    );

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_names_and_types() {
        let prompt = RenderedPrompt::new("본문");
        let downloads = downloads_for(&prompt, "seo_prompt");

        assert_eq!(downloads.len(), 2);
        assert_eq!(downloads[0].file_name, "seo_prompt.md");
        assert_eq!(downloads[0].mime_type, "text/markdown");
        assert_eq!(downloads[1].file_name, "seo_prompt.txt");
        assert_eq!(downloads[1].mime_type, "text/plain");
    }

    #[test]
    fn test_payloads_are_byte_identical() {
        let prompt = RenderedPrompt::new("<role>\n카페\n</role>\r\n  ");
        let downloads = downloads_for(&prompt, "seo_prompt");

        assert_eq!(downloads[0].bytes, downloads[1].bytes);
        assert_eq!(downloads[0].bytes, prompt.as_bytes());
    }

    #[test]
    fn test_parse_format_names() {
        assert_eq!(DownloadFormat::parse("MD").unwrap(), DownloadFormat::Markdown);
        assert_eq!(DownloadFormat::parse("text").unwrap(), DownloadFormat::PlainText);
        assert!(matches!(
            DownloadFormat::parse("pdf"),
            Err(DownloadError::UnknownFormat(name)) if name == "pdf"
        ));
    }

    #[tokio::test]
    async fn test_write_download() {
        let dir = TempDir::new().unwrap();
        let prompt = RenderedPrompt::new("우리 카페");
        let download = Download::new(DownloadFormat::PlainText, &prompt, "cafe");

        let path = write_download(&download, dir.path()).await.unwrap();

        assert_eq!(path, dir.path().join("cafe.txt"));
        assert_eq!(std::fs::read(&path).unwrap(), "우리 카페".as_bytes());
    }
}
