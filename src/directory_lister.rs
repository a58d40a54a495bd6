// directory_lister.rs — Single-threaded directory enumeration
//
// Core enumeration loop: read_dir over the target directory, hidden-entry
// filtering, match collection into a growable Vec. One enumeration pass per
// invocation; the resulting set is immutable afterwards except for order.

use std::path::Path;

use crate::ehm::AppError;
use crate::file_info::FileInfo;





////////////////////////////////////////////////////////////////////////////////
//
//  collect_entries
//
//  Enumerate the visible entries of a directory. Hidden entries (leading
//  '.') are filtered out during the pass. Failure to open the directory is
//  fatal; a failure while reading an individual entry is a diagnostic and
//  the pass continues — one bad entry never hides the rest.
//
////////////////////////////////////////////////////////////////////////////////

pub fn collect_entries(dir_path: &Path) -> Result<Vec<FileInfo>, AppError> {
    let read_dir = std::fs::read_dir(dir_path).map_err(|e| AppError::DirectoryOpen {
        path:   dir_path.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(de) => de,
            Err(e) => {
                eprintln!("rcls: reading '{}': {}", dir_path.display(), e);
                continue;
            }
        };

        let file_name = dir_entry.file_name();
        if is_hidden(file_name.as_encoded_bytes()) {
            continue;
        }

        entries.push(FileInfo::new(file_name));
    }

    Ok(entries)
}





////////////////////////////////////////////////////////////////////////////////
//
//  resolve_all_metadata
//
//  Resolve metadata once for every entry. Called only when the active
//  configuration needs metadata (long format, time sort, or color
//  classification); each failure is reported to stderr and the entry is
//  left in the Failed state for the displayers to handle.
//
////////////////////////////////////////////////////////////////////////////////

pub fn resolve_all_metadata(dir_path: &Path, entries: &mut [FileInfo]) {
    for fi in entries.iter_mut() {
        if let Err(e) = fi.resolve_metadata(dir_path) {
            eprintln!("rcls: {}: {}", dir_path.join(&fi.file_name).display(), e);
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  is_hidden
//
//  Check if an entry name is hidden (starts with '.'). This also covers
//  the "." and ".." pseudo-entries, though read_dir never yields those.
//
////////////////////////////////////////////////////////////////////////////////

fn is_hidden(name: &[u8]) -> bool {
    name.first() == Some(&b'.')
}
