//! File - Picked File Tracking for File Inputs
//!
//! The platform dialog returns paths; this module filters them against an
//! accept list and keeps one or many depending on the input mode.

use std::path::{Path, PathBuf};

/// Extensions matched by the `type/*` shorthands
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "svg"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "flac", "m4a"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mkv", "avi"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "csv", "log"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum AcceptRule {
    /// `.png`
    Extension(String),
    /// `image/*` and friends
    Family(&'static [&'static str]),
}

/// Parsed `accept` list such as `".pdf,image/*"`
///
/// An empty list accepts every file. Unknown entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptFilter {
    rules: Vec<AcceptRule>,
}

impl AcceptFilter {
    pub fn parse(accept: &str) -> Self {
        let rules = accept
            .split(',')
            .map(str::trim)
            .filter_map(|entry| {
                if let Some(extension) = entry.strip_prefix('.') {
                    return (!extension.is_empty()).then(|| AcceptRule::Extension(extension.to_ascii_lowercase()));
                }
                let family = match entry.to_ascii_lowercase().as_str() {
                    "image/*" => IMAGE_EXTENSIONS,
                    "audio/*" => AUDIO_EXTENSIONS,
                    "video/*" => VIDEO_EXTENSIONS,
                    "text/*" => TEXT_EXTENSIONS,
                    _ => return None,
                };
                Some(AcceptRule::Family(family))
            })
            .collect();
        Self { rules }
    }

    /// Check a path against the list
    pub fn accepts(&self, path: &Path) -> bool {
        if self.rules.is_empty() {
            return true;
        }
        let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let extension = extension.to_ascii_lowercase();
        self.rules.iter().any(|rule| match rule {
            AcceptRule::Extension(expected) => *expected == extension,
            AcceptRule::Family(family) => family.contains(&extension.as_str()),
        })
    }
}

/// What a file input shows for its selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSummary {
    /// Single mode: the file name
    Name(String),
    /// Multiple mode: how many files are held
    Count(usize),
}

/// Files currently held by a file input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    multiple: bool,
    files: Vec<PathBuf>,
}

impl FileSelection {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            files: Vec::new(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Replace the selection with the accepted `paths`.
    ///
    /// Single mode keeps the first accepted path. Returns `false` when
    /// nothing was accepted, leaving the previous selection in place.
    pub fn pick(&mut self, paths: Vec<PathBuf>, filter: &AcceptFilter) -> bool {
        let mut accepted: Vec<PathBuf> = paths.into_iter().filter(|p| filter.accepts(p)).collect();
        if accepted.is_empty() {
            return false;
        }
        if !self.multiple {
            accepted.truncate(1);
        }
        self.files = accepted;
        true
    }

    /// Drop every file; returns whether anything was held
    pub fn clear(&mut self) -> bool {
        let had_files = !self.files.is_empty();
        self.files.clear();
        had_files
    }

    /// `None` while empty
    pub fn summary(&self) -> Option<FileSummary> {
        match self.files.as_slice() {
            [] => None,
            [file] if !self.multiple => Some(FileSummary::Name(file_name(file))),
            files => Some(FileSummary::Count(files.len())),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = AcceptFilter::parse("");
        assert!(filter.accepts(Path::new("notes")));
        assert!(filter.accepts(Path::new("photo.PNG")));
    }

    #[test]
    fn extensions_and_families() {
        let filter = AcceptFilter::parse(".pdf, image/*, application/zip");
        assert!(filter.accepts(Path::new("/tmp/report.PDF")));
        assert!(filter.accepts(Path::new("cat.jpeg")));
        assert!(!filter.accepts(Path::new("archive.zip")));
        assert!(!filter.accepts(Path::new("README")));
    }

    #[test]
    fn single_mode_keeps_first_accepted() {
        let mut selection = FileSelection::new(false);
        let filter = AcceptFilter::parse(".txt");
        assert!(selection.pick(paths(&["a.md", "b.txt", "c.txt"]), &filter));
        assert_eq!(selection.files(), paths(&["b.txt"]).as_slice());
        assert_eq!(selection.summary(), Some(FileSummary::Name("b.txt".into())));
    }

    #[test]
    fn multiple_mode_counts_files() {
        let mut selection = FileSelection::new(true);
        assert!(selection.pick(paths(&["a.md", "b.txt"]), &AcceptFilter::default()));
        assert_eq!(selection.summary(), Some(FileSummary::Count(2)));
    }

    #[test]
    fn rejected_pick_keeps_previous_files() {
        let mut selection = FileSelection::new(false);
        let filter = AcceptFilter::parse("image/*");
        assert!(selection.pick(paths(&["dog.png"]), &filter));
        assert!(!selection.pick(paths(&["notes.txt"]), &filter));
        assert_eq!(selection.summary(), Some(FileSummary::Name("dog.png".into())));
    }

    #[test]
    fn clear_reports_whether_anything_changed() {
        let mut selection = FileSelection::new(true);
        assert!(!selection.clear());
        selection.pick(paths(&["a.txt"]), &AcceptFilter::default());
        assert!(selection.clear());
        assert!(selection.is_empty());
        assert_eq!(selection.summary(), None);
    }
}
