//! Filesystem collaborator used by translation discovery.
//!
//! Paths handed to a [`Filesystem`] are *logical*: `/`-separated and relative
//! to the filesystem's local root. [`Filesystem::path_prefix`] turns them back
//! into absolute local paths.

use crate::error::{Error, Result};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// What a listed entry is, after resolving symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Broken symlinks, sockets, fifos
    Other,
}

/// One entry returned by [`Filesystem::list_contents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    path: String,
    kind: EntryKind,
}

impl FileInfo {
    pub fn new(path: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Logical path relative to the filesystem root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Last path segment
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Text after the last `.` of the file name, or `""` when it has no `.`.
    ///
    /// Dotfiles count as all extension: `.gitkeep` gives `gitkeep`.
    pub fn extension(&self) -> &str {
        self.file_name()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or("")
    }

    /// File name with `suffix` removed from the end, if present.
    ///
    /// A name that is nothing but the suffix is returned whole.
    pub fn file_name_without(&self, suffix: &str) -> &str {
        let name = self.file_name();
        match name.strip_suffix(suffix) {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => name,
        }
    }
}

/// Minimal filesystem surface the translation loader relies on.
pub trait Filesystem: Send + Sync {
    /// Whether anything exists at the logical path.
    fn has(&self, path: &str) -> Result<bool>;

    /// Lists entries below `path`, descending into subdirectories when
    /// `recursive` is set. The directory itself is not included.
    fn list_contents(&self, path: &str, recursive: bool) -> Result<Vec<FileInfo>>;

    /// Local directory that logical paths are relative to.
    fn path_prefix(&self) -> &Path;
}

/// [`Filesystem`] backed by a directory on local disk.
///
/// Listings are sorted by file name within each directory, so traversal order
/// is the same on every platform.
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    root: PathBuf,
}

impl LocalFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn to_logical(&self, local: &Path) -> String {
        let relative = local.strip_prefix(&self.root).unwrap_or(local);
        relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Filesystem for LocalFilesystem {
    fn has(&self, path: &str) -> Result<bool> {
        let local = self.resolve(path);
        local.try_exists().map_err(|source| Error::Io {
            path: local,
            source,
        })
    }

    fn list_contents(&self, path: &str, recursive: bool) -> Result<Vec<FileInfo>> {
        let walker = WalkDir::new(self.resolve(path))
            .min_depth(1)
            .max_depth(if recursive { usize::MAX } else { 1 })
            .follow_links(false)
            .sort_by_file_name();

        let mut entries = Vec::new();
        for entry in walker {
            let entry = entry?;
            let file_type = entry.file_type();

            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_symlink() {
                // Classify by target; a dangling link is neither
                match std::fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_dir() => EntryKind::Directory,
                    Ok(meta) if meta.is_file() => EntryKind::File,
                    _ => EntryKind::Other,
                }
            } else {
                EntryKind::Other
            };

            entries.push(FileInfo::new(self.to_logical(entry.path()), kind));
        }

        Ok(entries)
    }

    fn path_prefix(&self) -> &Path {
        &self.root
    }
}

/// Root directory handle of one extension.
#[derive(Clone)]
pub struct BaseDirectory {
    filesystem: Arc<dyn Filesystem>,
    path: String,
}

impl BaseDirectory {
    pub fn new(filesystem: Arc<dyn Filesystem>, path: impl Into<String>) -> Self {
        Self {
            filesystem,
            path: path.into().trim_matches('/').to_string(),
        }
    }

    /// Base directory covering the whole of a local directory.
    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(LocalFilesystem::new(root)), "")
    }

    /// Logical path of the directory within its filesystem
    pub fn full_path(&self) -> &str {
        &self.path
    }

    pub fn filesystem(&self) -> &Arc<dyn Filesystem> {
        &self.filesystem
    }

    /// Logical path of a direct child.
    pub fn child(&self, name: &str) -> String {
        let name = name.trim_matches('/');
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.path, name)
        }
    }
}

impl std::fmt::Debug for BaseDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseDirectory")
            .field("prefix", &self.filesystem.path_prefix())
            .field("path", &self.path)
            .finish()
    }
}
