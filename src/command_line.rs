// command_line.rs — CLI argument parsing (custom, no clap)
//
// Unix-style single-character switches, combinable in clusters (-lt is -l
// plus -t). The first positional argument is the target directory; extra
// positionals are ignored. Display switches do not conflict: when several
// are given, precedence is long > horizontal > columnar > simple.

use std::path::PathBuf;

use crate::ehm::AppError;

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Active display strategy, after precedence resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Long,       // -l — detailed one-entry-per-line records
    Horizontal, // -x — across-then-down columns
    Columnar,   // -C — down-then-across columns (default)
    Simple,     // -1 — one name per line
}

/// Primary sort criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,    // default — case-insensitive alphabetical
    ModTime, // -t — newest first
}

// ── CommandLine struct ────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CommandLine {
    pub long_listing:  bool,
    pub columnar:      bool,
    pub horizontal:    bool,
    pub single_column: bool,
    pub sort_key:      SortKey,
    pub reverse:       bool,
    pub dir_path:      PathBuf,
}

impl Default for CommandLine {
    fn default() -> Self {
        CommandLine {
            long_listing:  false,
            columnar:      false,
            horizontal:    false,
            single_column: false,
            sort_key:      SortKey::Name,
            reverse:       false,
            dir_path:      PathBuf::from("."),
        }
    }
}

impl CommandLine {
    /// Parse command-line arguments into a CommandLine struct.
    /// Args should NOT include argv[0] (program name).
    pub fn parse_from<I, S>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cmd = CommandLine::default();
        let mut have_path = false;

        for arg_ref in args {
            let arg = arg_ref.as_ref();
            if arg.is_empty() {
                continue;
            }

            if let Some(cluster) = arg.strip_prefix('-') {
                if cluster.is_empty() {
                    // A bare "-" is a path, not a switch cluster
                    if !have_path {
                        cmd.dir_path = PathBuf::from(arg);
                        have_path = true;
                    }
                    continue;
                }

                for ch in cluster.chars() {
                    cmd.handle_switch(ch)?;
                }
            } else if !have_path {
                // First positional argument wins; extras are ignored
                cmd.dir_path = PathBuf::from(arg);
                have_path = true;
            }
        }

        Ok(cmd)
    }

    /// Route a single switch character.
    fn handle_switch(&mut self, ch: char) -> Result<(), AppError> {
        match ch {
            'l' => { self.long_listing  = true; Ok(()) }
            'C' => { self.columnar      = true; Ok(()) }
            'x' => { self.horizontal    = true; Ok(()) }
            '1' => { self.single_column = true; Ok(()) }
            't' => { self.sort_key      = SortKey::ModTime; Ok(()) }
            'r' => { self.reverse       = true; Ok(()) }
            _   => Err(AppError::InvalidArg(format!("invalid option -- '{}'", ch))),
        }
    }

    /// Resolve the active display mode.
    /// Priority: long > horizontal > columnar > simple; columnar is the
    /// default when no display switch is given.
    pub fn display_mode(&self) -> DisplayMode {
        if self.long_listing {
            DisplayMode::Long
        } else if self.horizontal {
            DisplayMode::Horizontal
        } else if self.columnar {
            DisplayMode::Columnar
        } else if self.single_column {
            DisplayMode::Simple
        } else {
            DisplayMode::Columnar
        }
    }
}
