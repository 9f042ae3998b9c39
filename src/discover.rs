use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collect every documentation page under `root`, at any nesting depth.
/// A page is any plain file whose name ends with `.html`; order follows the
/// walk and carries no meaning.
pub fn html_pages(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".html"))
        .map(|entry| entry.into_path())
        .collect()
}

// ── Tests ──
