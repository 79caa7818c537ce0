//! World dimensions of the road grid and the ship.
//!
//! Column `c` spans `x` in `[(c - 3.5), (c - 2.5)] * BLOCK_SIZE`, row `r`
//! spans `z` in `[-(r + 1), -r] * BLOCK_SIZE` (forward travel is `-z`) and a
//! cell's base sits at `altitude * ALTITUDE_STEP`.

use crate::{Number, Vector3D};

/// Lateral lanes per row.
pub const LANES: usize = 7;

const BLOCK_SIZE_RAW: i32 = 256;

pub const BLOCK_SIZE: Number = Number::from_raw(BLOCK_SIZE_RAW);
/// `1 / BLOCK_SIZE`, kept integral so scaling positions never divides.
pub const BLOCKS_PER_UNIT: i32 = 16;

const _: () = assert!(BLOCK_SIZE_RAW * BLOCKS_PER_UNIT == 1 << 12);

pub const TILE_HEIGHT: Number = Number::from_raw(42);
/// Height of a low block above its tile.
pub const SHORT_HEIGHT: Number = Number::from_raw(171);
/// Inner ceiling of a tunnel above the cell base.
pub const TUNNEL_CEILING: Number = Number::from_raw(170);
pub const ALTITUDE_STEP: Number = Number::from_raw(BLOCK_SIZE_RAW / 2);

/// Column coordinate of the world's lateral origin.
pub const LANE_CENTER: Number = Number::from_raw(7 << 11);

pub const SHIP_SIZE: Vector3D<Number> = Vector3D::new(
    Number::from_raw(BLOCK_SIZE_RAW / 2),
    Number::from_raw(BLOCK_SIZE_RAW / 4),
    Number::from_raw(BLOCK_SIZE_RAW / 2),
);
