// simple.rs — Simple format displayer: one name per line, no decoration

use crate::config::Config;
use crate::console::Console;
use crate::file_info::FileInfo;

use super::ResultsDisplayer;
use super::common::write_colored_name;





////////////////////////////////////////////////////////////////////////////////

/// Simple format displayer — one name per output line, in sorted order.
pub struct SimpleDisplayer {
    console: Console,
    config:  Config,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl SimpleDisplayer
//
//  Simple displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl SimpleDisplayer {

    pub fn new(console: Console, config: Config) -> Self {
        SimpleDisplayer { console, config }
    }

    pub fn into_console(self) -> Console {
        self.console
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for SimpleDisplayer
//
//  One colorized name per line.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for SimpleDisplayer {

    fn display_results(&mut self, entries: &[FileInfo]) {
        for fi in entries {
            write_colored_name(&mut self.console, &self.config, fi);
            self.console.newline();
        }
    }
}
