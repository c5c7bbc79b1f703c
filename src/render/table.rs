//! Revision-history table.
//!
//! Three columns with a single visible separator line between the header and
//! the body: a bottom border under the header cells and a matching top
//! border on the first data row. Every other border, including the
//! table-level and inside kinds, is explicitly none.

use docx_rs::{
    BorderType, Run, Table, TableBorder, TableBorderPosition, TableBorders, TableCell,
    TableCellBorder, TableCellBorderPosition, TableRow, WidthType,
};

use crate::model::RevisionRow;
use crate::render::block::blank_paragraph;
use crate::render::options::RenderOptions;

const HEADER_TITLES: [&str; 3] = ["Date", "Revised By", "Description"];

/// Column widths in fiftieths of a percent of the table width.
const COLUMN_WIDTHS: [usize; 3] = [1370, 985, 2640];

/// Full available text width, in fiftieths of a percent.
const TABLE_WIDTH: usize = 5000;

/// Separator weight in eighths of a point (1.5pt).
const SEPARATOR_SIZE: usize = 12;

/// Build the revision-history table for a table-kind section.
pub(crate) fn revision_table(rows: &[RevisionRow], options: &RenderOptions) -> Table {
    let mut table_rows = Vec::with_capacity(rows.len() + 1);
    table_rows.push(header_row(options));
    for (index, row) in rows.iter().enumerate() {
        table_rows.push(data_row(row, index == 0, options));
    }

    Table::new(table_rows)
        .width(TABLE_WIDTH, WidthType::Pct)
        .set_borders(invisible_borders())
}

fn header_row(options: &RenderOptions) -> TableRow {
    let cells = HEADER_TITLES
        .iter()
        .zip(COLUMN_WIDTHS)
        .map(|(title, width)| {
            cell(title, true, width, options).set_border(separator(TableCellBorderPosition::Bottom))
        })
        .collect();
    TableRow::new(cells)
}

fn data_row(row: &RevisionRow, first: bool, options: &RenderOptions) -> TableRow {
    let cells = row
        .cells()
        .into_iter()
        .zip(COLUMN_WIDTHS)
        .map(|(value, width)| {
            let cell = cell(value, false, width, options);
            if first {
                cell.set_border(separator(TableCellBorderPosition::Top))
            } else {
                cell
            }
        })
        .collect();
    TableRow::new(cells)
}

fn cell(text: &str, bold: bool, width: usize, options: &RenderOptions) -> TableCell {
    let mut run = Run::new().add_text(text).size(options.base_size_pt * 2);
    if bold {
        run = run.bold();
    }
    TableCell::new()
        .width(width, WidthType::Pct)
        .add_paragraph(blank_paragraph().add_run(run))
}

fn separator(position: TableCellBorderPosition) -> TableCellBorder {
    TableCellBorder::new(position)
        .border_type(BorderType::Single)
        .size(SEPARATOR_SIZE)
        .color("000000")
}

fn invisible_borders() -> TableBorders {
    use TableBorderPosition::*;
    [Top, Bottom, Left, Right, InsideH, InsideV]
        .into_iter()
        .fold(TableBorders::new(), |borders, position| {
            borders.set(TableBorder::new(position).border_type(BorderType::None))
        })
}
