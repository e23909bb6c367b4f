// file: src/loader/mod.rs
// description: folder enumeration and per-file document loading
// reference: https://docs.rs/walkdir

pub mod encoding;

use crate::error::{QaError, Result};
use crate::models::Document;
use crate::protocol;
use crate::utils::Validator;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Supported source file kinds, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Text,
    Pdf,
}

impl SourceKind {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") | Some("md") => Some(Self::Text),
            Some("pdf") => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Reads the direct children of a folder into `Document`s. Per-file
/// failures are logged and skipped; the batch continues.
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Enumerate `folder` (non-recursive) and load every supported file.
    /// Returns the possibly-empty documents in enumeration order.
    pub fn load_folder(&self, folder: &Path) -> Result<Vec<Document>> {
        Validator::validate_directory(folder)?;

        info!("Loading documents from {}", folder.display());
        let mut documents = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Unreadable directory entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(kind) = SourceKind::from_path(path) else {
                debug!("Skipping unsupported file: {}", path.display());
                continue;
            };

            let filename = entry.file_name().to_string_lossy().to_string();

            match self.read_document(path, kind) {
                Ok(content) => {
                    protocol::log(&format!("成功读取文件: {filename}"));
                    documents.push(Document::new(content, filename));
                }
                Err(e) => {
                    warn!("Failed to load {}: {}", path.display(), e);
                    protocol::log(&format!("读取文件 {filename} 时出错: {e}"));
                }
            }
        }

        info!("Loaded {} documents", documents.len());
        Ok(documents)
    }

    fn read_document(&self, path: &Path, kind: SourceKind) -> Result<String> {
        match kind {
            SourceKind::Text => {
                let bytes = fs::read(path).map_err(|source| QaError::FileOperation {
                    path: path.to_path_buf(),
                    source,
                })?;

                encoding::decode_bytes(&bytes).map(|(text, _)| text).map_err(
                    |encoding_name| QaError::Encoding {
                        path: path.to_path_buf(),
                        encoding: encoding_name.to_string(),
                    },
                )
            }
            SourceKind::Pdf => {
                pdf_extract::extract_text(path).map_err(|e| QaError::PdfExtraction {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        }
    }
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_txt_and_md() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "Cats are mammals.").unwrap();
        fs::write(temp.path().join("b.md"), "Cats hunt mice.").unwrap();

        let mut documents = DocumentLoader::new().load_folder(temp.path()).unwrap();
        documents.sort_by(|a, b| a.source.cmp(&b.source));

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].source, "a.txt");
        assert_eq!(documents[0].content, "Cats are mammals.");
        assert_eq!(documents[1].source, "b.md");
    }

    #[test]
    fn test_unsupported_extensions_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.docx"), "binary-ish").unwrap();
        fs::write(temp.path().join("image.png"), [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let documents = DocumentLoader::new().load_folder(temp.path()).unwrap();

        assert!(documents.is_empty());
    }

    #[test]
    fn test_enumeration_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("hidden.txt"), "Should not be loaded.").unwrap();
        fs::write(temp.path().join("top.txt"), "Top-level only.").unwrap();

        let documents = DocumentLoader::new().load_folder(temp.path()).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source, "top.txt");
    }

    #[test]
    fn test_corrupt_pdf_is_skipped_without_aborting() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.pdf"), "not a real pdf").unwrap();
        fs::write(temp.path().join("ok.txt"), "Still loads.").unwrap();

        let documents = DocumentLoader::new().load_folder(temp.path()).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].source, "ok.txt");
    }

    #[test]
    fn test_gbk_file_decodes() {
        let temp = TempDir::new().unwrap();
        // "猫是哺乳动物。" in GBK
        let gbk = [
            0xC3u8, 0xA8, 0xCA, 0xC7, 0xB2, 0xB8, 0xC8, 0xE9, 0xB6, 0xAF, 0xCE, 0xEF, 0xA1, 0xA3,
        ];
        fs::write(temp.path().join("gbk.txt"), gbk).unwrap();

        let documents = DocumentLoader::new().load_folder(temp.path()).unwrap();

        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].content, "猫是哺乳动物。");
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let result = DocumentLoader::new().load_folder(Path::new("/nonexistent/folder"));
        assert!(result.is_err());
    }
}
