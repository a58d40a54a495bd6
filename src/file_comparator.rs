// file_comparator.rs — Entry sorting comparisons
//
// Sorts FileInfo entries by name or by modification time. The name order is
// case-insensitive with a case-sensitive byte tiebreak, so the order is
// total and deterministic. Time order is newest first with the name
// comparator as tiebreak. Reversal is applied to the fully ordered
// sequence, never folded into the comparator, so it composes identically
// with either key.

use std::cmp::Ordering;
use std::time::SystemTime;

use crate::command_line::{CommandLine, SortKey};
use crate::file_info::FileInfo;

/// Sort a slice of entries according to the CommandLine sort preferences.
pub fn sort_entries(entries: &mut [FileInfo], cmd: &CommandLine) {
    match cmd.sort_key {
        SortKey::Name    => entries.sort_by(|a, b| compare_names(a, b, false)),
        SortKey::ModTime => entries.sort_by(compare_mod_times),
    }

    if cmd.reverse {
        entries.reverse();
    }
}

/// Compare two entries by name.
/// The case-insensitive variant folds ASCII case first; names equal after
/// folding fall back to a case-sensitive byte comparison so ties break
/// deterministically.
fn compare_names(lhs: &FileInfo, rhs: &FileInfo, case_sensitive: bool) -> Ordering {
    let lhs_bytes = lhs.file_name.as_encoded_bytes();
    let rhs_bytes = rhs.file_name.as_encoded_bytes();

    if case_sensitive {
        return lhs_bytes.cmp(rhs_bytes);
    }

    let folded = lhs_bytes
        .iter()
        .map(|b| b.to_ascii_lowercase())
        .cmp(rhs_bytes.iter().map(|b| b.to_ascii_lowercase()));

    match folded {
        Ordering::Equal => lhs_bytes.cmp(rhs_bytes),
        other => other,
    }
}

/// Compare two entries by modification time, newest first.
/// Equal timestamps fall back to the case-sensitive name comparator.
/// Entries without resolved metadata take the epoch timestamp, so they
/// group after everything newer and order among themselves by name.
fn compare_mod_times(lhs: &FileInfo, rhs: &FileInfo) -> Ordering {
    let lhs_time = mod_time_or_epoch(lhs);
    let rhs_time = mod_time_or_epoch(rhs);

    match rhs_time.cmp(&lhs_time) {
        Ordering::Equal => compare_names(lhs, rhs, true),
        other => other,
    }
}

fn mod_time_or_epoch(fi: &FileInfo) -> SystemTime {
    fi.metadata().map_or(SystemTime::UNIX_EPOCH, |md| md.modified)
}
