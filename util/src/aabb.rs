use crate::{Axis, Number, Vector3D};

/// Axis-aligned box in world units. Callers keep `min <= max` on every axis.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Aabb {
    pub min: Vector3D<Number>,
    pub max: Vector3D<Number>,
}

impl Aabb {
    pub const fn new(min: Vector3D<Number>, max: Vector3D<Number>) -> Self {
        Self { min, max }
    }

    pub fn from_corner(corner: Vector3D<Number>, size: Vector3D<Number>) -> Self {
        Self::new(corner, corner + size)
    }

    pub fn translate(self, offset: Vector3D<Number>) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    pub fn size(&self) -> Vector3D<Number> {
        self.max - self.min
    }

    /// Interiors intersect on every axis; touching faces do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.min[axis] < other.max[axis] && other.min[axis] < self.max[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(min: i32, max: i32) -> Aabb {
        Aabb::new(
            Vector3D::splat(Number::new(min)),
            Vector3D::splat(Number::new(max)),
        )
    }

    #[test]
    fn overlap_excludes_touching() {
        assert!(cube(0, 2).overlaps(&cube(1, 3)));
        assert!(!cube(0, 1).overlaps(&cube(1, 2)));
        assert!(!cube(0, 1).overlaps(&cube(2, 3)));
    }

    #[test]
    fn translate_keeps_size() {
        let moved = cube(0, 1).translate(Vector3D::splat(Number::new(5)));
        assert_eq!(moved, cube(5, 6));
        assert_eq!(moved.size(), Vector3D::splat(Number::new(1)));
    }
}
