// common.rs — Shared display helpers used by the Simple, Long, and Columnar
// displayers: permission rendering, type indicator chars, timestamp
// formatting, and colored-name emission.

use chrono::{DateTime, Local};
use std::time::SystemTime;

use crate::color::ColorCategory;
use crate::config::Config;
use crate::console::Console;
use crate::file_info::{self, FileInfo, FileKind};





////////////////////////////////////////////////////////////////////////////////
//
//  type_char
//
//  Single-character type indicator for the long listing.
//
////////////////////////////////////////////////////////////////////////////////

pub fn type_char(kind: FileKind) -> char {
    match kind {
        FileKind::Regular     => '-',
        FileKind::Directory   => 'd',
        FileKind::Symlink     => 'l',
        FileKind::CharDevice  => 'c',
        FileKind::BlockDevice => 'b',
        FileKind::Fifo        => 'p',
        FileKind::Socket      => 's',
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  permissions_string
//
//  The nine rwx permission characters, '-' for absent bits.
//
////////////////////////////////////////////////////////////////////////////////

pub fn permissions_string(mode: u32) -> String {
    const BITS: [(u32, char); 9] = [
        (file_info::S_IRUSR, 'r'),
        (file_info::S_IWUSR, 'w'),
        (file_info::S_IXUSR, 'x'),
        (file_info::S_IRGRP, 'r'),
        (file_info::S_IWGRP, 'w'),
        (file_info::S_IXGRP, 'x'),
        (file_info::S_IROTH, 'r'),
        (file_info::S_IWOTH, 'w'),
        (file_info::S_IXOTH, 'x'),
    ];

    BITS.iter()
        .map(|&(bit, ch)| if mode & bit != 0 { ch } else { '-' })
        .collect()
}





////////////////////////////////////////////////////////////////////////////////
//
//  format_mod_time
//
//  Month-abbreviation day hour:minute, local time (e.g. "Mar 07 14:30").
//
////////////////////////////////////////////////////////////////////////////////

pub fn format_mod_time(modified: SystemTime) -> String {
    let local: DateTime<Local> = modified.into();
    local.format("%b %d %H:%M").to_string()
}





////////////////////////////////////////////////////////////////////////////////
//
//  write_colored_name
//
//  Emit an entry name wrapped in its category color. Only the name is
//  wrapped; callers pad outside the wrap so width math sees the visible
//  name length.
//
////////////////////////////////////////////////////////////////////////////////

pub fn write_colored_name(console: &mut Console, config: &Config, fi: &FileInfo) {
    let category = ColorCategory::classify(fi);
    let name = fi.name_lossy().into_owned();
    console.print_colored(config.color_for(category), &name);
}
