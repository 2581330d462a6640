//! Content discovery by filesystem walking.
//!
//! The scanner only identifies markdown sources, returning lightweight
//! references for [`SiteBuilder`](crate::SiteBuilder) to render.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reference to one markdown source file.
#[derive(Debug, Clone)]
pub(crate) struct PageRef {
    /// Absolute or caller-relative path to the `.md` file.
    pub source: PathBuf,
    /// Path relative to the content root, kept for mirroring the layout
    /// into the output directory.
    pub rel_path: PathBuf,
}

/// Walk the content directory and collect every markdown file.
///
/// Hidden files and directories are skipped. Entries are visited in name
/// order so discovery is deterministic.
pub(crate) fn scan_content(content_dir: &Path) -> io::Result<Vec<PageRef>> {
    let mut pages = Vec::new();
    walk_content(content_dir, content_dir, &mut pages)?;
    Ok(pages)
}

fn walk_content(base: &Path, current: &Path, pages: &mut Vec<PageRef>) -> io::Result<()> {
    let mut entries = fs::read_dir(current)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(fs::DirEntry::file_name);

    for entry in entries {
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            walk_content(base, &path, pages)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let rel_path = path.strip_prefix(base).unwrap_or(&path).to_path_buf();
            pages.push(PageRef { source: path, rel_path });
        }
    }
    Ok(())
}
