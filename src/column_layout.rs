// column_layout.rs — Column geometry for the multi-column display modes
//
// Derives a grid from the entry name widths and the terminal width. Both
// columnar modes share the derivation; they differ only in traversal, which
// the displayers own. Geometry invariants: columns >= 1, rows >= 1,
// rows * columns >= entry_count, and the rendered field width is never
// narrower than the longest name.

/// Computed grid geometry for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub columns:    usize,
    pub rows:       usize,
    /// Width of the widest name; names are padded to this within a cell.
    pub name_width: usize,
    /// name_width + separator padding; the stride of one column.
    pub cell_width: usize,
}

impl ColumnLayout {
    /// Compute the grid for `name_widths.len()` entries.
    ///
    /// Returns None for an empty entry set — no geometry exists and the
    /// caller emits nothing.
    pub fn compute(name_widths: &[usize], terminal_width: usize, padding: usize) -> Option<ColumnLayout> {
        if name_widths.is_empty() {
            return None;
        }

        let entry_count = name_widths.len();
        let name_width = name_widths.iter().copied().max().unwrap_or(0).max(1);
        let cell_width = name_width + padding;

        let mut columns = (terminal_width / cell_width).max(1).min(entry_count);
        let mut rows = entry_count.div_ceil(columns);

        // A single row of more than 3 entries reads badly on wide terminals;
        // rebalance to roughly two rows.
        if rows == 1 && entry_count > 3 {
            rows = entry_count.div_ceil(2);
            columns = entry_count.div_ceil(rows);
        }

        Some(ColumnLayout { columns, rows, name_width, cell_width })
    }

    /// Linear entry index occupying (row, col) under column-major fill, or
    /// None when the cell is past the end of the entry set.
    pub fn entry_index(&self, row: usize, col: usize, entry_count: usize) -> Option<usize> {
        let idx = row + col * self.rows;
        (idx < entry_count).then_some(idx)
    }

    /// Grid position of linear index `i` under column-major fill.
    pub fn placement(&self, i: usize) -> (usize, usize) {
        (i % self.rows, i / self.rows)
    }
}
