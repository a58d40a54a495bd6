// file_info.rs — File information structures
//
// FileInfo holds one visible directory entry: its name plus lazily resolved
// metadata. Metadata is resolved through lstat semantics (symlink_metadata)
// at most once per entry; the result — or the failure — is memoized so
// sorting and rendering share a single resolution.

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::{Duration, SystemTime};

// ── Permission bit constants (POSIX mode bits) ────────────────────────────────

pub const S_IRUSR: u32 = 0o400;
pub const S_IWUSR: u32 = 0o200;
pub const S_IXUSR: u32 = 0o100;
pub const S_IRGRP: u32 = 0o040;
pub const S_IWGRP: u32 = 0o020;
pub const S_IXGRP: u32 = 0o010;
pub const S_IROTH: u32 = 0o004;
pub const S_IWOTH: u32 = 0o002;
pub const S_IXOTH: u32 = 0o001;

/// Any execute bit (owner, group, or other).
pub const S_IXANY: u32 = S_IXUSR | S_IXGRP | S_IXOTH;

// ── File kind ─────────────────────────────────────────────────────────────────

/// File type as reported by lstat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Regular,
    Directory,
    Symlink,
    CharDevice,
    BlockDevice,
    Fifo,
    Socket,
}

impl FileKind {
    fn from_file_type(ft: &fs::FileType) -> FileKind {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else if ft.is_socket() {
            FileKind::Socket
        } else {
            FileKind::Regular
        }
    }
}

// ── File metadata ─────────────────────────────────────────────────────────────

/// Metadata facts for a single entry, captured from one lstat call.
#[derive(Debug, Clone)]
pub struct FileMetadata {
    pub kind:     FileKind,
    pub mode:     u32,
    pub nlink:    u64,
    pub uid:      u32,
    pub gid:      u32,
    pub size:     u64,
    pub modified: SystemTime,
}

impl FileMetadata {
    /// Capture the facts this tool renders from an fs::Metadata record.
    pub fn from_metadata(md: &fs::Metadata) -> FileMetadata {
        // mtime() is signed seconds since the epoch; pre-epoch timestamps
        // clamp to the epoch itself.
        let modified = if md.mtime() >= 0 {
            SystemTime::UNIX_EPOCH + Duration::new(md.mtime() as u64, md.mtime_nsec() as u32)
        } else {
            SystemTime::UNIX_EPOCH
        };

        FileMetadata {
            kind:     FileKind::from_file_type(&md.file_type()),
            mode:     md.mode(),
            nlink:    md.nlink(),
            uid:      md.uid(),
            gid:      md.gid(),
            size:     md.size(),
            modified,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == FileKind::Directory
    }

    pub fn is_executable(&self) -> bool {
        self.mode & S_IXANY != 0
    }
}

// ── Metadata resolution state ─────────────────────────────────────────────────

/// Resolution state: metadata is fetched at most once per entry.
#[derive(Debug, Clone)]
pub enum MetadataState {
    Pending,
    Resolved(FileMetadata),
    Failed,
}

// ── File information ──────────────────────────────────────────────────────────

/// One visible directory entry: name + memoized metadata state.
#[derive(Debug, Clone)]
pub struct FileInfo {
    pub file_name: OsString,
    pub metadata:  MetadataState,
}

impl FileInfo {
    pub fn new(file_name: OsString) -> FileInfo {
        FileInfo { file_name, metadata: MetadataState::Pending }
    }

    /// Resolve metadata for this entry, once. Subsequent calls reuse the
    /// memoized result. Failure is memoized too, so a broken entry is
    /// stat'ed exactly once per invocation.
    pub fn resolve_metadata(&mut self, dir_path: &Path) -> Result<(), std::io::Error> {
        if let MetadataState::Pending = self.metadata {
            let full_path = dir_path.join(&self.file_name);
            match fs::symlink_metadata(&full_path) {
                Ok(md) => {
                    self.metadata = MetadataState::Resolved(FileMetadata::from_metadata(&md));
                }
                Err(e) => {
                    self.metadata = MetadataState::Failed;
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Resolved metadata, if resolution has happened and succeeded.
    pub fn metadata(&self) -> Option<&FileMetadata> {
        match &self.metadata {
            MetadataState::Resolved(md) => Some(md),
            _ => None,
        }
    }

    /// Display form of the name. Directory entry names on Unix are bytes;
    /// non-UTF-8 names render lossily rather than failing the listing.
    pub fn name_lossy(&self) -> std::borrow::Cow<'_, str> {
        self.file_name.to_string_lossy()
    }

    /// Visible width of the name in terminal cells.
    pub fn name_width(&self) -> usize {
        self.name_lossy().chars().count()
    }
}
