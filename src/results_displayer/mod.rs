// results_displayer — Display formatting for directory listings
//
// Provides the ResultsDisplayer trait with Simple, Long, and Columnar
// implementations, plus a Displayer enum wrapper selected from the
// command line.
//
// Module structure:
//   mod.rs      — shared types (ResultsDisplayer trait, Displayer enum)
//   common.rs   — shared helpers (permissions, type chars, timestamps, cells)
//   simple.rs   — SimpleDisplayer: one name per line
//   long.rs     — LongDisplayer: fixed-format metadata records
//   columnar.rs — ColumnarDisplayer: both multi-column fill orders

mod columnar;
mod common;
mod long;
mod simple;

use crate::command_line::{CommandLine, DisplayMode};
use crate::config::Config;
use crate::console::Console;
use crate::file_info::FileInfo;

pub use self::columnar::{ColumnarDisplayer, FillOrder};
pub use self::long::LongDisplayer;
pub use self::simple::SimpleDisplayer;





/// Trait for displaying a sorted entry set.
pub trait ResultsDisplayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_results
    //
    //  Render the ordered entry set for one directory.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_results(&mut self, entries: &[FileInfo]);
}





////////////////////////////////////////////////////////////////////////////////

/// Polymorphic displayer wrapping Simple, Long, or Columnar variants.
pub enum Displayer {
    Simple(SimpleDisplayer),
    Long(LongDisplayer),
    Columnar(ColumnarDisplayer),
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl Displayer
//
//  Polymorphic displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl Displayer {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  new
    //
    //  Create the appropriate displayer for the resolved display mode.
    //  Priority: long > horizontal > columnar > simple.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn new(console: Console, config: Config, cmd: &CommandLine) -> Self {
        match cmd.display_mode() {
            DisplayMode::Long => {
                Displayer::Long(LongDisplayer::new(console, config))
            }
            DisplayMode::Horizontal => {
                Displayer::Columnar(ColumnarDisplayer::new(console, config, FillOrder::AcrossThenDown))
            }
            DisplayMode::Columnar => {
                Displayer::Columnar(ColumnarDisplayer::new(console, config, FillOrder::DownThenAcross))
            }
            DisplayMode::Simple => {
                Displayer::Simple(SimpleDisplayer::new(console, config))
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  into_console
    //
    //  Consume the displayer and return the Console.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn into_console(self) -> Console {
        match self {
            Displayer::Simple(d)   => d.into_console(),
            Displayer::Long(d)     => d.into_console(),
            Displayer::Columnar(d) => d.into_console(),
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for Displayer
//
//  Dispatch to the underlying displayer variant.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for Displayer {

    fn display_results(&mut self, entries: &[FileInfo]) {
        match self {
            Displayer::Simple(d)   => d.display_results(entries),
            Displayer::Long(d)     => d.display_results(entries),
            Displayer::Columnar(d) => d.display_results(entries),
        }
    }
}
