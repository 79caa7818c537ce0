#![no_std]

mod command;
mod overlay;
mod writer;

pub use command::{
    fifo_pack, material_pack, normal_pack, rgb15, vertex_pack, GfxCommand, Primitive,
};
pub use overlay::{box_faces, draw_box, draw_trace, Face};
pub use writer::{DispWriter, WriterState, MIN_BUFFER_LENGTH};
