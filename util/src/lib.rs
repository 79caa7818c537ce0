#![no_std]

use agb_fixnum::Num;

mod aabb;
mod cell;
mod fixed_vec;
pub mod geometry;
mod vector;

pub use aabb::Aabb;
pub use cell::{Behaviour, Cell, CellFlags, Row};
pub use fixed_vec::FixedVec;
pub use vector::{Axis, Vector3D};

/// 20.12 signed fixed point, the handheld's native world unit.
pub type Number = Num<i32, 12>;
