// long.rs — Long format displayer: type, permissions, links, owner, group,
// size, timestamp, filename
//
// Record layout, single-space separated:
//   <type+perms(10)> <nlink >=2> <owner <=8> <group <=8> <size >=8> <time> <name>
//
// Entries whose metadata could not be resolved are skipped; the resolution
// pass already reported them, and the remaining entries still render.

use crate::config::Config;
use crate::console::Console;
use crate::file_info::{FileInfo, FileMetadata};
use crate::owner;

use super::ResultsDisplayer;
use super::common::{format_mod_time, permissions_string, type_char, write_colored_name};





////////////////////////////////////////////////////////////////////////////////

/// Long format displayer — one fixed-structure metadata record per entry.
pub struct LongDisplayer {
    console: Console,
    config:  Config,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl LongDisplayer
//
//  Long displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl LongDisplayer {

    pub fn new(console: Console, config: Config) -> Self {
        LongDisplayer { console, config }
    }

    pub fn into_console(self) -> Console {
        self.console
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_record
    //
    //  Emit one long-format record. Everything up to the name is plain
    //  text; the name carries the category color.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_record(&mut self, fi: &FileInfo, md: &FileMetadata) {
        let record = format! (
            "{}{} {:>2} {:<8} {:<8} {:>8} {} ",
            type_char(md.kind),
            permissions_string(md.mode),
            md.nlink,
            owner::owner_name(md.uid),
            owner::group_name(md.gid),
            md.size,
            format_mod_time(md.modified),
        );

        self.console.print(&record);
        write_colored_name(&mut self.console, &self.config, fi);
        self.console.newline();
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for LongDisplayer
//
//  Long-format directory listing. Unresolved entries are skipped;
//  processing continues for the rest.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for LongDisplayer {

    fn display_results(&mut self, entries: &[FileInfo]) {
        for fi in entries {
            if let Some(md) = fi.metadata() {
                self.display_record(fi, md);
            }
        }
    }
}
