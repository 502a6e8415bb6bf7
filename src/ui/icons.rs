// src/ui/icons.rs
//! Icon mappings for entries and drives in the browser.

use crate::fs::FileCategory;

/// Get the appropriate icon for a listing entry.
pub fn icon_for_entry(is_dir: bool, is_parent: bool, category: Option<FileCategory>) -> &'static str {
    if is_parent {
        return "\u{f062}"; // up arrow
    }
    if is_dir {
        return "\u{f07b}"; // folder icon
    }
    match category.unwrap_or(FileCategory::Other) {
        FileCategory::Code => "\u{f121}",
        FileCategory::Web => "\u{f0ac}",
        FileCategory::Data => "\u{f1c0}",
        FileCategory::Docs => "\u{f15c}",
        FileCategory::Image => "\u{f1c5}",
        FileCategory::Other => "\u{f016}",
    }
}

/// Map the service's drive icon names onto glyphs.
pub fn drive_icon(name: &str) -> &'static str {
    match name {
        "hdd-rack-fill" => "\u{f233}", // root filesystem
        _ => "\u{f0a0}",
    }
}
