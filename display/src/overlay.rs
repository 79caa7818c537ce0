use collide::CollisionTrace;
use util::{Aabb, Number, Vector3D};

use crate::command::rgb15;
use crate::writer::DispWriter;

const CANDIDATE_COLOUR: u16 = rgb15(31, 16, 0);
const SHIP_COLOUR: u16 = rgb15(0, 24, 31);

/// One side of a box, wound counter-clockwise when seen from outside.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Face {
    pub normal: Vector3D<Number>,
    pub corners: [Vector3D<Number>; 4],
}

/// The faces the chase camera can see: top, front, left and right.
pub fn box_faces(aabb: &Aabb) -> [Face; 4] {
    let (min, max) = (aabb.min, aabb.max);
    let (zero, one) = (Number::new(0), Number::new(1));
    let corner = |x: Number, y: Number, z: Number| Vector3D::new(x, y, z);

    [
        Face {
            normal: Vector3D::new(zero, one, zero),
            corners: [
                corner(min.x, max.y, max.z),
                corner(max.x, max.y, max.z),
                corner(max.x, max.y, min.z),
                corner(min.x, max.y, min.z),
            ],
        },
        Face {
            normal: Vector3D::new(zero, zero, one),
            corners: [
                corner(min.x, min.y, max.z),
                corner(max.x, min.y, max.z),
                corner(max.x, max.y, max.z),
                corner(min.x, max.y, max.z),
            ],
        },
        Face {
            normal: Vector3D::new(-one, zero, zero),
            corners: [
                corner(min.x, min.y, min.z),
                corner(min.x, min.y, max.z),
                corner(min.x, max.y, max.z),
                corner(min.x, max.y, min.z),
            ],
        },
        Face {
            normal: Vector3D::new(one, zero, zero),
            corners: [
                corner(max.x, min.y, max.z),
                corner(max.x, min.y, min.z),
                corner(max.x, max.y, min.z),
                corner(max.x, max.y, max.z),
            ],
        },
    ]
}

/// Draws `aabb` completely or not at all.
pub fn draw_box(writer: &mut DispWriter<'_>, aabb: &Aabb) -> bool {
    let state = writer.save();
    for face in box_faces(aabb) {
        writer.normal(face.normal).quad(face.corners);
    }
    if writer.is_full() {
        writer.reset(state);
        return false;
    }
    true
}

/// Draws the candidate boxes and both ship boxes of the last query.
///
/// Stops at the first box that does not fit and returns false, leaving the
/// boxes drawn before it in place.
pub fn draw_trace(writer: &mut DispWriter<'_>, trace: &CollisionTrace) -> bool {
    writer.diffuse_ambient(CANDIDATE_COLOUR, rgb15(4, 2, 0), true);
    for aabb in trace.bounds.iter() {
        if !draw_box(writer, aabb) {
            return false;
        }
    }

    writer.diffuse_ambient(SHIP_COLOUR, rgb15(0, 3, 4), true);
    draw_box(writer, &trace.ship) && draw_box(writer, &trace.projected_ship)
}
