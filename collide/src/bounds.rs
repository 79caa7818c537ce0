use util::geometry::{
    ALTITUDE_STEP, BLOCKS_PER_UNIT, BLOCK_SIZE, LANES, LANE_CENTER, SHIP_SIZE, SHORT_HEIGHT,
    TILE_HEIGHT, TUNNEL_CEILING,
};
use util::{Aabb, CellFlags, FixedVec, Number, Row, Vector3D};

/// Position of a cell in the grid. Orders by row, then column.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct CellIndex {
    pub row: i32,
    pub column: i32,
}

impl CellIndex {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }
}

/// Appends the cells under the ship's footprint when its corner sits at
/// `position`. Writes nothing when the footprint lies entirely outside
/// columns 0 to 7. Column 7 is past the last lane and has no cells.
pub fn select_tiles(position: Vector3D<Number>, out: &mut FixedVec<CellIndex, 8>) {
    let near_column = (LANE_CENTER + position.x * BLOCKS_PER_UNIT).floor();
    let far_column = (LANE_CENTER + (position.x + SHIP_SIZE.x) * BLOCKS_PER_UNIT).floor();
    let near_row = (-(position.z + SHIP_SIZE.z) * BLOCKS_PER_UNIT).floor();
    let far_row = (-position.z * BLOCKS_PER_UNIT).floor();

    if far_column < 0 || near_column > LANES as i32 {
        return;
    }

    out.push(CellIndex::new(near_row, near_column));
    match (near_column == far_column, near_row == far_row) {
        (true, true) => {}
        (true, false) => out.push(CellIndex::new(far_row, near_column)),
        (false, true) => out.push(CellIndex::new(near_row, far_column)),
        (false, false) => out.extend_from_slice(&[
            CellIndex::new(near_row, far_column),
            CellIndex::new(far_row, near_column),
            CellIndex::new(far_row, far_column),
        ]),
    }
}

fn cell_flags_at(index: CellIndex, grid: &[Row]) -> Option<(CellFlags, u8)> {
    let row = grid.get(usize::try_from(index.row).ok()?)?;
    let cell = row.get(usize::try_from(index.column).ok()?)?;
    cell.has_geometry().then_some((cell.flags, cell.altitude))
}

/// Appends the solid boxes of the cell at `index`. Cells outside the grid or
/// without shape flags contribute nothing.
///
/// A tunnel yields its floor (when it has a tile), the left wall, the roof
/// and the right wall, in that order. Anything else is a single slab.
pub fn make_bounds(index: CellIndex, grid: &[Row], out: &mut FixedVec<Aabb, 32>) {
    let Some((flags, altitude)) = cell_flags_at(index, grid) else {
        return;
    };

    let base = ALTITUDE_STEP * i32::from(altitude);
    let left = (Number::new(index.column) - LANE_CENTER) * BLOCK_SIZE;
    let right = left + BLOCK_SIZE;
    let front = BLOCK_SIZE * -index.row;
    let back = front - BLOCK_SIZE;

    let slab = |x: (Number, Number), y: (Number, Number)| {
        Aabb::new(Vector3D::new(x.0, y.0, back), Vector3D::new(x.1, y.1, front))
    };

    if flags.contains(CellFlags::TUNNEL) {
        // low on top of a tunnel shares the plain tunnel's roof
        let top = if flags.contains(CellFlags::HIGH) {
            base + BLOCK_SIZE
        } else {
            base + TILE_HEIGHT + SHORT_HEIGHT
        };
        let ceiling = base + TUNNEL_CEILING;

        let bottom = if flags.contains(CellFlags::TILE) {
            out.push(slab((left, right), (base, base + TILE_HEIGHT)));
            base
        } else {
            base + TILE_HEIGHT
        };

        out.push(slab((left, left + TILE_HEIGHT), (bottom, ceiling)));
        out.push(slab((left, right), (ceiling, top)));
        out.push(slab((right - TILE_HEIGHT, right), (bottom, ceiling)));
    } else {
        let height = if flags.contains(CellFlags::HIGH) {
            BLOCK_SIZE
        } else if flags.contains(CellFlags::LOW) {
            TILE_HEIGHT + SHORT_HEIGHT
        } else {
            TILE_HEIGHT
        };

        out.push(slab((left, right), (base, base + height)));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use util::Cell;

    fn raw(value: i32) -> Number {
        Number::from_raw(value)
    }

    fn tiles_at(x: i32, z: i32) -> FixedVec<CellIndex, 8> {
        let mut out = FixedVec::new();
        select_tiles(Vector3D::new(raw(x), Number::new(0), raw(z)), &mut out);
        out
    }

    fn bounds_of(cell: Cell) -> FixedVec<Aabb, 32> {
        let mut row = [Cell::EMPTY; LANES];
        row[3] = cell;
        let grid = [row];
        let mut out = FixedVec::new();
        make_bounds(CellIndex::new(0, 3), &grid, &mut out);
        out
    }

    fn heights(boxes: &[Aabb]) -> std::vec::Vec<(i32, i32)> {
        boxes
            .iter()
            .map(|b| (b.min.y.to_raw(), b.max.y.to_raw()))
            .collect()
    }

    #[test]
    fn ship_inside_one_cell() {
        // column 3 spans x in [-128, 128], row 1 spans z in [-512, -256]
        assert_eq!(&*tiles_at(-64, -448), &[CellIndex::new(1, 3)]);
    }

    #[test]
    fn ship_straddling_columns_and_rows() {
        assert_eq!(
            &*tiles_at(64, -448),
            &[CellIndex::new(1, 3), CellIndex::new(1, 4)]
        );
        assert_eq!(
            &*tiles_at(-64, -320),
            &[CellIndex::new(0, 3), CellIndex::new(1, 3)]
        );
        assert_eq!(
            &*tiles_at(64, -320),
            &[
                CellIndex::new(0, 3),
                CellIndex::new(0, 4),
                CellIndex::new(1, 3),
                CellIndex::new(1, 4),
            ]
        );
    }

    #[test]
    fn ship_beside_the_track_selects_nothing() {
        // left of column 0 begins at x = -896
        assert!(tiles_at(-896 - 129, -448).is_empty());
        // column 7 spans x in [896, 1152] and still counts as on the track
        assert_eq!(&*tiles_at(896, -448), &[CellIndex::new(1, 7)]);
        assert!(tiles_at(1152, -448).is_empty());
        // partially over the outermost lane still counts
        assert_eq!(&*tiles_at(-896 - 64, -448), &[CellIndex::new(1, -1), CellIndex::new(1, 0)]);
    }

    #[test]
    fn plain_slabs() {
        let tile = bounds_of(Cell::new(0, 0, 0, CellFlags::TILE));
        assert_eq!(
            &*tile,
            &[Aabb::new(
                Vector3D::new(raw(-128), raw(0), raw(-256)),
                Vector3D::new(raw(128), raw(42), raw(0)),
            )]
        );

        let low = bounds_of(Cell::new(0, 0, 2, CellFlags::TILE | CellFlags::LOW));
        assert_eq!(heights(&low), [(256, 256 + 42 + 171)]);

        let high = bounds_of(Cell::new(0, 0, 1, CellFlags::HIGH));
        assert_eq!(heights(&high), [(128, 128 + 256)]);
    }

    #[test]
    fn tunnel_with_floor() {
        let boxes = bounds_of(Cell::new(0, 0, 0, CellFlags::TUNNEL | CellFlags::TILE));
        assert_eq!(heights(&boxes), [(0, 42), (0, 170), (170, 213), (0, 170)]);

        let x = |b: &Aabb| (b.min.x.to_raw(), b.max.x.to_raw());
        assert_eq!(
            boxes.iter().map(x).collect::<std::vec::Vec<_>>(),
            [(-128, 128), (-128, -86), (-128, 128), (86, 128)]
        );
    }

    #[test]
    fn tunnel_without_floor_raises_its_walls() {
        let boxes = bounds_of(Cell::new(0, 0, 0, CellFlags::TUNNEL));
        assert_eq!(heights(&boxes), [(42, 170), (170, 213), (42, 170)]);
    }

    #[test]
    fn tunnel_roof_ignores_low_but_not_high() {
        let low = bounds_of(Cell::new(0, 0, 0, CellFlags::TUNNEL | CellFlags::LOW));
        assert_eq!(heights(&low)[1], (170, 213));

        let high = bounds_of(Cell::new(0, 0, 0, CellFlags::TUNNEL | CellFlags::HIGH));
        assert_eq!(heights(&high)[1], (170, 256));
    }

    #[test]
    fn cells_without_geometry_or_out_of_range_yield_nothing() {
        assert!(bounds_of(Cell::new(0, 0, 0, CellFlags::END | CellFlags::DRAWN)).is_empty());

        let grid = [[Cell::new(0, 0, 0, CellFlags::TILE); LANES]];
        let mut out = FixedVec::new();
        for index in [
            CellIndex::new(-1, 0),
            CellIndex::new(1, 0),
            CellIndex::new(0, -1),
            CellIndex::new(0, LANES as i32),
        ] {
            make_bounds(index, &grid, &mut out);
        }
        assert!(out.is_empty());
    }
}
