#![no_std]

use util::{CellFlags, Row};

mod level {
    use util::{Cell, Row};

    include!(concat!(env!("OUT_DIR"), "/level.rs"));
}

pub fn rows() -> &'static [Row] {
    level::ROWS
}

/// Index of the first row with a finish line cell.
pub fn finish_row() -> Option<usize> {
    rows()
        .iter()
        .position(|row| row.iter().any(|cell| cell.flags.contains(CellFlags::END)))
}
