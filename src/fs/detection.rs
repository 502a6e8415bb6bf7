// src/fs/detection.rs
//! File categorization from entry names.
//!
//! Listings come from the backend, so only the name is available and there
//! are no local bytes to sniff. Well-known source extensions are matched
//! first, then `mime_guess` decides from the name alone.

use std::path::Path;

use mime_guess::MimeGuess;

/// High-level categories, used to pick listing icons.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FileCategory {
    Code,
    Web,
    Data,
    Docs,
    Image,
    Other,
}

/// Categorize a remote entry by its name.
pub fn category_for(name: &str) -> FileCategory {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "js" | "ts" | "jsx" | "tsx" | "py" | "ipynb" | "rs" | "go" | "java" | "c" | "cpp"
        | "h" | "rb" | "php" | "sh" => FileCategory::Code,
        "html" | "htm" | "css" | "scss" | "sass" => FileCategory::Web,
        "json" | "yaml" | "yml" | "toml" | "csv" | "xml" => FileCategory::Data,
        "md" | "markdown" | "txt" | "pdf" | "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" => {
            FileCategory::Docs
        }
        "jpg" | "jpeg" | "png" | "gif" | "svg" => FileCategory::Image,
        _ => {
            // Fall back to a name-based MIME guess.
            let mime = MimeGuess::from_path(Path::new(name))
                .first_or_octet_stream()
                .to_string();
            match mime.split('/').next().unwrap_or("") {
                "text" => FileCategory::Docs,
                "image" => FileCategory::Image,
                _ => FileCategory::Other,
            }
        }
    }
}
