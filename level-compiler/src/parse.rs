use itertools::Itertools;
use phf::phf_map;
use thiserror::Error;
use util::geometry::LANES;
use util::{Behaviour, Cell, CellFlags, Row};

static COLOUR_NAMES: phf::Map<&'static str, Behaviour> = phf_map! {
    "death" => Behaviour::Death,
    "life" => Behaviour::Life,
    "slow" => Behaviour::Slow,
    "fast" => Behaviour::Fast,
    "ice" => Behaviour::Ice,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("line {line}: unknown cell flag '{flag}'")]
    BadFlag { line: usize, flag: char },
    #[error("line {line}: altitude '{value}' is not a number from 0 to 255")]
    BadAltitude { line: usize, value: String },
    #[error("line {line}: colour '{value}' is neither a palette index nor one of {expected}")]
    BadColour {
        line: usize,
        value: String,
        expected: String,
    },
    #[error("line {line}: expected {expected} cells, found {found}", expected = LANES)]
    WrongLaneCount { line: usize, found: usize },
    #[error("line {line}: repeat count '{value}' is not a positive number")]
    BadRepeat { line: usize, value: String },
}

fn parse_flags(line: usize, text: &str) -> Result<CellFlags, LevelError> {
    text.chars().try_fold(CellFlags::empty(), |flags, flag| {
        let bit = match flag {
            't' => CellFlags::TILE,
            'l' => CellFlags::LOW,
            'h' => CellFlags::HIGH,
            'n' => CellFlags::TUNNEL,
            'e' => CellFlags::END,
            _ => return Err(LevelError::BadFlag { line, flag }),
        };
        Ok(flags | bit)
    })
}

fn parse_colour(line: usize, text: &str) -> Result<u8, LevelError> {
    if let Some(behaviour) = COLOUR_NAMES.get(text) {
        return Ok(behaviour.palette_index());
    }

    text.parse().map_err(|_| LevelError::BadColour {
        line,
        value: text.to_owned(),
        expected: COLOUR_NAMES.keys().sorted().join(", "),
    })
}

/// `FLAGS[@ALTITUDE][:TILE[/BLOCK]]`, or `.` for an empty cell.
fn parse_cell(line: usize, text: &str) -> Result<Cell, LevelError> {
    if text == "." {
        return Ok(Cell::EMPTY);
    }

    let (shape, colours) = text.split_once(':').unwrap_or((text, ""));
    let (flags, altitude) = shape.split_once('@').unwrap_or((shape, "0"));

    let flags = parse_flags(line, flags)?;
    let altitude = altitude.parse().map_err(|_| LevelError::BadAltitude {
        line,
        value: altitude.to_owned(),
    })?;

    let (tile_color, block_color) = match colours.split_once('/') {
        Some((tile, block)) => (parse_colour(line, tile)?, parse_colour(line, block)?),
        None if colours.is_empty() => (0, 0),
        None => {
            let colour = parse_colour(line, colours)?;
            (colour, colour)
        }
    };

    Ok(Cell::new(tile_color, block_color, altitude, flags))
}

/// Parses a level, one row per line in the order they are driven over.
///
/// Each line holds one cell per lane and may end with `*N` to repeat the row
/// `N` times. Everything after a `#` is ignored.
pub fn parse_level(source: &str) -> Result<Vec<Row>, LevelError> {
    let mut rows = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let text = text.split_once('#').map_or(text, |(content, _)| content);

        let mut tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let repeat = match tokens.last().and_then(|last| last.strip_prefix('*')) {
            Some(count) => {
                tokens.pop();
                match count.parse::<usize>() {
                    Ok(count) if count > 0 => count,
                    _ => {
                        return Err(LevelError::BadRepeat {
                            line,
                            value: count.to_owned(),
                        })
                    }
                }
            }
            None => 1,
        };

        if tokens.len() != LANES {
            return Err(LevelError::WrongLaneCount {
                line,
                found: tokens.len(),
            });
        }

        let mut row = [Cell::EMPTY; LANES];
        for (cell, token) in row.iter_mut().zip(&tokens) {
            *cell = parse_cell(line, token)?;
        }

        rows.extend(std::iter::repeat(row).take(repeat));
    }

    Ok(rows)
}
