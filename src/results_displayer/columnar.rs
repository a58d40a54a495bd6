// columnar.rs — Multi-column displayer for both fill orders
//
// Down-then-across renders through the precomputed grid in column-major
// fill, printed row by row. Across-then-down is a greedy single pass with a
// running width counter; a line breaks when the next cell would overflow
// the terminal width, or when the line already holds a full row of
// columns — whichever binds first. Names are padded to the shared name
// width with separator spaces between columns, never after the last column
// of a line, and color never touches the padding.

use crate::column_layout::ColumnLayout;
use crate::config::Config;
use crate::console::Console;
use crate::file_info::FileInfo;

use super::ResultsDisplayer;
use super::common::write_colored_name;





/// Fill order for the multi-column layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOrder {
    DownThenAcross,
    AcrossThenDown,
}





////////////////////////////////////////////////////////////////////////////////

/// Multi-column displayer — column-major or row-major fill.
pub struct ColumnarDisplayer {
    console:    Console,
    config:     Config,
    fill_order: FillOrder,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ColumnarDisplayer
//
//  Columnar displayer construction and console access.
//
////////////////////////////////////////////////////////////////////////////////

impl ColumnarDisplayer {

    pub fn new(console: Console, config: Config, fill_order: FillOrder) -> Self {
        ColumnarDisplayer { console, config, fill_order }
    }

    pub fn into_console(self) -> Console {
        self.console
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_down_then_across
    //
    //  Column-major fill, printed row by row. The cell at (row, col) holds
    //  entry row + col * rows; cells past the entry count stay empty.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_down_then_across(&mut self, entries: &[FileInfo], layout: &ColumnLayout) {
        let entry_count = entries.len();

        for row in 0..layout.rows {
            for col in 0..layout.columns {
                let Some(idx) = layout.entry_index(row, col, entry_count) else {
                    break;
                };

                let fi = &entries[idx];
                let last_in_row = col + 1 >= layout.columns
                    || layout.entry_index(row, col + 1, entry_count).is_none();

                write_colored_name(&mut self.console, &self.config, fi);

                if !last_in_row {
                    let fill = layout.name_width - fi.name_width() + self.config.padding;
                    self.console.pad(fill);
                }
            }
            self.console.newline();
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  display_across_then_down
    //
    //  Greedy row-major pass. The width rule is primary: break when the
    //  accumulated width plus one more cell would exceed the terminal.
    //  The column-count rule is the secondary bound.
    //
    ////////////////////////////////////////////////////////////////////////////

    fn display_across_then_down(&mut self, entries: &[FileInfo], layout: &ColumnLayout) {
        let terminal_width = self.console.width();
        let mut on_line = 0usize;
        let mut line_width = 0usize;
        let mut prev_name_width = 0usize;

        for fi in entries {
            if on_line > 0 {
                if line_width + layout.cell_width > terminal_width || on_line == layout.columns {
                    self.console.newline();
                    on_line = 0;
                    line_width = 0;
                } else {
                    // Close out the previous cell before placing this one
                    let fill = layout.name_width - prev_name_width + self.config.padding;
                    self.console.pad(fill);
                }
            }

            write_colored_name(&mut self.console, &self.config, fi);

            prev_name_width = fi.name_width();
            on_line += 1;
            line_width += layout.cell_width;
        }

        if on_line > 0 {
            self.console.newline();
        }
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ResultsDisplayer for ColumnarDisplayer
//
//  Geometry from ColumnLayout, traversal per fill order. Zero entries
//  produce no output and no geometry.
//
////////////////////////////////////////////////////////////////////////////////

impl ResultsDisplayer for ColumnarDisplayer {

    fn display_results(&mut self, entries: &[FileInfo]) {
        let name_widths: Vec<usize> = entries.iter().map(|fi| fi.name_width()).collect();

        let Some(layout) =
            ColumnLayout::compute(&name_widths, self.console.width(), self.config.padding)
        else {
            return;
        };

        match self.fill_order {
            FillOrder::DownThenAcross => self.display_down_then_across(entries, &layout),
            FillOrder::AcrossThenDown => self.display_across_then_down(entries, &layout),
        }
    }
}
