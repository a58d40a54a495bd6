// color.rs — Color categories, classification, and color name parsing
//
// Classification maps an entry to one of six display categories; the
// precedence chain is directory > symlink > special device > executable >
// archive suffix > default. Classification reads the entry's memoized
// metadata and never touches the filesystem itself.

use crate::ansi_codes;
use crate::ehm::AppError;
use crate::file_info::{FileInfo, FileKind};

// ── Color categories ──────────────────────────────────────────────────────────

/// Display-color category for a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum ColorCategory {
    Directory     = 0,
    Symlink       = 1,
    SpecialDevice = 2,
    Executable    = 3,
    Archive       = 4,
    Default       = 5,
}

/// Archive name suffixes that classify as Archive.
pub const ARCHIVE_SUFFIXES: [&str; 4] = [".tar", ".gz", ".zip", ".tgz"];

impl ColorCategory {
    pub const COUNT: usize = 6;

    /// All categories in index order.
    pub const ALL: [ColorCategory; Self::COUNT] = [
        ColorCategory::Directory,
        ColorCategory::Symlink,
        ColorCategory::SpecialDevice,
        ColorCategory::Executable,
        ColorCategory::Archive,
        ColorCategory::Default,
    ];

    /// Classify an entry. First match in the precedence chain wins; an entry
    /// whose metadata could not be resolved is Default.
    pub fn classify(fi: &FileInfo) -> ColorCategory {
        let md = match fi.metadata() {
            Some(md) => md,
            None => return ColorCategory::Default,
        };

        match md.kind {
            FileKind::Directory => return ColorCategory::Directory,
            FileKind::Symlink   => return ColorCategory::Symlink,
            FileKind::CharDevice | FileKind::BlockDevice | FileKind::Socket => {
                return ColorCategory::SpecialDevice;
            }
            _ => {}
        }

        if md.is_executable() {
            return ColorCategory::Executable;
        }

        let name = fi.name_lossy();
        if ARCHIVE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            return ColorCategory::Archive;
        }

        ColorCategory::Default
    }

    /// Category name as it appears in RCLS env var override keys.
    pub fn name(&self) -> &'static str {
        match self {
            ColorCategory::Directory     => "Directory",
            ColorCategory::Symlink       => "Symlink",
            ColorCategory::SpecialDevice => "SpecialDevice",
            ColorCategory::Executable    => "Executable",
            ColorCategory::Archive       => "Archive",
            ColorCategory::Default       => "Default",
        }
    }

    /// Lookup category by name (case-insensitive, for env var overrides).
    pub fn from_name(name: &str) -> Option<ColorCategory> {
        Self::ALL.iter().copied().find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

// ── Color name ↔ SGR mapping ──────────────────────────────────────────────────

struct ColorMapping {
    name: &'static str,
    code: u8,
}

static COLOR_MAP: &[ColorMapping] = &[
    ColorMapping { name: "Black",        code: ansi_codes::FG_BLACK                             },
    ColorMapping { name: "Blue",         code: ansi_codes::FG_BLUE                              },
    ColorMapping { name: "Green",        code: ansi_codes::FG_GREEN                             },
    ColorMapping { name: "Cyan",         code: ansi_codes::FG_CYAN                              },
    ColorMapping { name: "Red",          code: ansi_codes::FG_RED                               },
    ColorMapping { name: "Magenta",      code: ansi_codes::FG_MAGENTA                           },
    ColorMapping { name: "Brown",        code: ansi_codes::FG_YELLOW                            },
    ColorMapping { name: "LightGrey",    code: ansi_codes::FG_WHITE                             },
    ColorMapping { name: "DarkGrey",     code: ansi_codes::FG_BLACK + ansi_codes::BRIGHT_OFFSET },
    ColorMapping { name: "LightBlue",    code: ansi_codes::FG_BLUE + ansi_codes::BRIGHT_OFFSET  },
    ColorMapping { name: "LightGreen",   code: ansi_codes::FG_GREEN + ansi_codes::BRIGHT_OFFSET },
    ColorMapping { name: "LightCyan",    code: ansi_codes::FG_CYAN + ansi_codes::BRIGHT_OFFSET  },
    ColorMapping { name: "LightRed",     code: ansi_codes::FG_RED + ansi_codes::BRIGHT_OFFSET   },
    ColorMapping { name: "LightMagenta", code: ansi_codes::FG_MAGENTA + ansi_codes::BRIGHT_OFFSET },
    ColorMapping { name: "Yellow",       code: ansi_codes::FG_YELLOW + ansi_codes::BRIGHT_OFFSET },
    ColorMapping { name: "White",        code: ansi_codes::FG_WHITE + ansi_codes::BRIGHT_OFFSET },
];

/// Parse a single color name (case-insensitive) into its SGR sequence.
pub fn parse_color_name(name: &str) -> Result<String, AppError> {
    for mapping in COLOR_MAP {
        if mapping.name.eq_ignore_ascii_case(name) {
            return Ok(ansi_codes::sgr_foreground(mapping.code));
        }
    }
    Err(AppError::InvalidArg(format!("invalid color name: {}", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_info::{FileMetadata, MetadataState};
    use std::ffi::OsString;
    use std::time::SystemTime;

    fn entry(name: &str, kind: FileKind, mode: u32) -> FileInfo {
        FileInfo {
            file_name: OsString::from(name),
            metadata:  MetadataState::Resolved(FileMetadata {
                kind,
                mode,
                nlink:    1,
                uid:      0,
                gid:      0,
                size:     0,
                modified: SystemTime::UNIX_EPOCH,
            }),
        }
    }

    #[test]
    fn classify_directory() {
        let fi = entry("src", FileKind::Directory, 0o755);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Directory);
    }

    #[test]
    fn classify_symlink() {
        let fi = entry("link", FileKind::Symlink, 0o777);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Symlink);
    }

    #[test]
    fn classify_special_devices() {
        for kind in [FileKind::CharDevice, FileKind::BlockDevice, FileKind::Socket] {
            let fi = entry("dev", kind, 0o644);
            assert_eq!(ColorCategory::classify(&fi), ColorCategory::SpecialDevice);
        }
    }

    #[test]
    fn fifo_is_not_special_device() {
        let fi = entry("pipe", FileKind::Fifo, 0o644);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Default);
    }

    #[test]
    fn classify_executable() {
        let fi = entry("run.sh", FileKind::Regular, 0o755);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Executable);
    }

    #[test]
    fn executable_beats_archive_suffix() {
        let fi = entry("backup.tar", FileKind::Regular, 0o755);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Executable);
    }

    #[test]
    fn classify_archive_suffixes() {
        for name in ["a.tar", "a.gz", "a.zip", "a.tgz"] {
            let fi = entry(name, FileKind::Regular, 0o644);
            assert_eq!(ColorCategory::classify(&fi), ColorCategory::Archive, "{}", name);
        }
    }

    #[test]
    fn archive_requires_suffix_match() {
        // ".tar" in the middle of a name is not an archive
        let fi = entry("my.tar.backup", FileKind::Regular, 0o644);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Default);
    }

    #[test]
    fn classify_plain_file() {
        let fi = entry("notes.txt", FileKind::Regular, 0o644);
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Default);
    }

    #[test]
    fn unresolved_metadata_is_default() {
        let fi = FileInfo {
            file_name: OsString::from("mystery"),
            metadata:  MetadataState::Failed,
        };
        assert_eq!(ColorCategory::classify(&fi), ColorCategory::Default);
    }

    #[test]
    fn category_name_roundtrip() {
        for cat in ColorCategory::ALL {
            assert_eq!(ColorCategory::from_name(cat.name()), Some(cat));
        }
        assert_eq!(ColorCategory::from_name("directory"), Some(ColorCategory::Directory));
        assert_eq!(ColorCategory::from_name("nonsense"), None);
    }

    #[test]
    fn parse_color_names() {
        assert_eq!(parse_color_name("Blue").unwrap(), "\x1b[0;34m");
        assert_eq!(parse_color_name("LightGreen").unwrap(), "\x1b[0;92m");
        assert_eq!(parse_color_name("yellow").unwrap(), "\x1b[0;93m");
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_color_name("Purple").is_err());
        assert!(parse_color_name("").is_err());
    }
}
