use bitflags::bitflags;

use crate::geometry::LANES;

bitflags! {
    /// Shape of a cell. Combinations with `TUNNEL` each describe a distinct
    /// solid shape.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
    pub struct CellFlags: u8 {
        const TILE = 0x01;
        const LOW = 0x02;
        const TUNNEL = 0x04;
        const HIGH = 0x08;
        /// Finish line.
        const END = 0x10;
        /// Runtime marker for cells already added to a display list.
        const DRAWN = 0x20;

        const GEOMETRY = Self::TILE.bits() | Self::LOW.bits() | Self::TUNNEL.bits() | Self::HIGH.bits();
    }
}

/// Palette indices at the start of the palette carry gameplay meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Behaviour {
    Death,
    Life,
    Slow,
    Fast,
    Ice,
}

impl Behaviour {
    pub const ALL: [Behaviour; 5] = [
        Behaviour::Death,
        Behaviour::Life,
        Behaviour::Slow,
        Behaviour::Fast,
        Behaviour::Ice,
    ];

    pub const fn palette_index(self) -> u8 {
        self as u8
    }

    pub fn from_palette_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

/// One lane-position of the road. Packs into exactly one 32-bit word:
/// tile colour in the low byte, then block colour, altitude and flags.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Cell {
    pub tile_color: u8,
    pub block_color: u8,
    pub altitude: u8,
    pub flags: CellFlags,
}

const _: () = assert!(core::mem::size_of::<Cell>() == core::mem::size_of::<u32>());

pub type Row = [Cell; LANES];

impl Cell {
    pub const EMPTY: Cell = Cell::new(0, 0, 0, CellFlags::empty());

    pub const fn new(tile_color: u8, block_color: u8, altitude: u8, flags: CellFlags) -> Self {
        Self {
            tile_color,
            block_color,
            altitude,
            flags,
        }
    }

    pub const fn from_packed(value: u32) -> Self {
        Self {
            tile_color: (value & 0xff) as u8,
            block_color: ((value >> 8) & 0xff) as u8,
            altitude: ((value >> 16) & 0xff) as u8,
            flags: CellFlags::from_bits_retain((value >> 24) as u8),
        }
    }

    pub const fn to_packed(self) -> u32 {
        self.tile_color as u32
            | (self.block_color as u32) << 8
            | (self.altitude as u32) << 16
            | (self.flags.bits() as u32) << 24
    }

    pub fn has_geometry(self) -> bool {
        self.flags.intersects(CellFlags::GEOMETRY)
    }

    pub fn tile_behaviour(self) -> Option<Behaviour> {
        Behaviour::from_palette_index(self.tile_color)
    }

    pub fn block_behaviour(self) -> Option<Behaviour> {
        Behaviour::from_palette_index(self.block_color)
    }
}
