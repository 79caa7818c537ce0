use collide::{collide, sweep_collide, CollideResult, SweepOutcome};
use proptest::prelude::*;
use util::geometry::{BLOCK_SIZE, LANES, SHIP_SIZE};
use util::{Aabb, Axis, Cell, CellFlags, Number, Row, Vector3D};

fn coordinate() -> impl Strategy<Value = Number> + Clone {
    (-16384..16384i32).prop_map(Number::from_raw)
}

fn extent() -> impl Strategy<Value = Number> + Clone {
    (1..4096i32).prop_map(Number::from_raw)
}

// Kept away from tiny non-zero speeds so reciprocals stay in range.
fn speed() -> impl Strategy<Value = Number> + Clone {
    prop_oneof![Just(0), 64..8192i32, -8192..=-64i32].prop_map(Number::from_raw)
}

fn arb_vec(component: impl Strategy<Value = Number> + Clone) -> impl Strategy<Value = Vector3D<Number>> {
    (component.clone(), component.clone(), component).prop_map(Vector3D::from)
}

fn arb_aabb() -> impl Strategy<Value = Aabb> {
    (arb_vec(coordinate()), arb_vec(extent())).prop_map(|(min, size)| Aabb::from_corner(min, size))
}

// b straddles a corner of a, so the interiors always intersect
fn overlapping_pair() -> impl Strategy<Value = (Aabb, Aabb)> {
    (arb_aabb(), arb_vec(extent()), arb_vec(extent()))
        .prop_map(|(a, below, above)| (a, Aabb::new(a.min - below, a.min + above)))
}

fn arb_cell() -> impl Strategy<Value = Cell> {
    (0u8..4, 0u8..0x20).prop_map(|(altitude, bits)| {
        Cell::new(0, 0, altitude, CellFlags::from_bits_truncate(bits))
    })
}

fn arb_grid() -> impl Strategy<Value = Vec<Row>> {
    proptest::collection::vec(proptest::array::uniform7(arb_cell()), 0..8)
}

fn small(range: core::ops::Range<i32>) -> impl Strategy<Value = Number> + Clone {
    range.prop_map(Number::from_raw)
}

proptest! {
    // Sweeping b past a is sweeping a past b in the other direction
    #[test]
    fn reference_frame_swap(a in arb_aabb(), b in arb_aabb(), v in arb_vec(speed())) {
        prop_assert_eq!(sweep_collide(&a, &b, v, 0), sweep_collide(&b, &a, -v, 0));
    }

    #[test]
    fn overlap_is_already((a, b) in overlapping_pair(), v in arb_vec(speed()), index in 0..32usize) {
        prop_assert!(a.overlaps(&b));
        prop_assert_eq!(sweep_collide(&a, &b, v, index), SweepOutcome::Already { index });
    }

    #[test]
    fn separated_without_motion_is_never(
        a in arb_aabb(),
        b in arb_aabb(),
        v in arb_vec(speed()),
        axis in prop_oneof![Just(Axis::X), Just(Axis::Y), Just(Axis::Z)],
    ) {
        prop_assume!(b.max[axis] <= a.min[axis] || b.min[axis] >= a.max[axis]);
        let mut v = v;
        v[axis] = Number::new(0);
        prop_assert_eq!(sweep_collide(&a, &b, v, 0), SweepOutcome::Never);
    }

    #[test]
    fn contact_time_is_within_the_step(a in arb_aabb(), b in arb_aabb(), v in arb_vec(speed())) {
        if let SweepOutcome::From { time, .. } = sweep_collide(&a, &b, v, 0) {
            prop_assert!(time >= Number::new(0));
            prop_assert!(time < Number::new(1));
        }
    }

    // Reciprocal truncation and the two floored products leave a few raw units
    #[test]
    fn contact_time_brings_the_faces_together(a in arb_aabb(), b in arb_aabb(), v in arb_vec(speed())) {
        if let SweepOutcome::From { time, axis, .. } = sweep_collide(&a, &b, v, 0) {
            let moved = b.translate(v * time);
            let gap = |x: Number, y: Number| (x - y).to_raw().abs();
            prop_assert!(
                gap(moved.min[axis], a.max[axis]) <= 8 || gap(moved.max[axis], a.min[axis]) <= 8,
                "{:?} and {:?} apart on {:?} at {:?}", a, moved, axis, time
            );
        }
    }

    #[test]
    fn collide_is_repeatable(
        grid in arb_grid(),
        position in (small(-1200..1200), small(0..600), small(-2048..0)).prop_map(Vector3D::from),
        velocity in arb_vec(small(-100..100)),
        previous_velocity in arb_vec(small(-100..100)),
    ) {
        let first = collide(position, velocity, previous_velocity, &grid, None);
        prop_assert_eq!(first, collide(position, velocity, previous_velocity, &grid, None));
    }

    #[test]
    fn heading_past_the_outer_lanes_falls_off(
        grid in arb_grid(),
        x in 0..512i32,
        z in -2048..0i32,
        left in any::<bool>(),
    ) {
        let lane_edge = Number::new(LANES as i32) / 2 / 16;
        let position = if left {
            Vector3D::new(-lane_edge - SHIP_SIZE.x - Number::from_raw(x + 1), Number::new(0), Number::from_raw(z))
        } else {
            Vector3D::new(lane_edge + BLOCK_SIZE + Number::from_raw(x), Number::new(0), Number::from_raw(z))
        };
        let still = Vector3D::splat(Number::new(0));

        prop_assert_eq!(collide(position, still, still, &grid, None), CollideResult::FellOff);
    }
}
