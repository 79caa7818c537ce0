#![no_std]

mod bounds;
mod sweep;

pub use bounds::{make_bounds, select_tiles, CellIndex};
pub use sweep::{sweep_collide, SweepOutcome, ALREADY, INFINITESIMAL, NEVER_EXITS};

use util::geometry::SHIP_SIZE;
use util::{Aabb, Axis, FixedVec, Number, Row, Vector3D};

/// What one step of ship motion runs into.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CollideResult {
    /// The ship is already inside `bounds`, which came from the cell `tile`.
    /// `ship` is the current ship box moved back by `previous_velocity`, the
    /// motion that most likely pushed it in.
    Already {
        bounds: Aabb,
        ship: Aabb,
        tile: CellIndex,
        previous_velocity: Vector3D<Number>,
    },
    /// First contact happens `time` into the step, against a face normal to
    /// `axis`.
    Correction { time: Number, axis: Axis },
    /// The next position is entirely off the lanes.
    FellOff,
    None,
}

impl CollideResult {
    /// The part of `velocity` that can be applied this step.
    pub fn corrected_velocity(&self, velocity: Vector3D<Number>) -> Vector3D<Number> {
        match *self {
            CollideResult::Correction { time, .. } => velocity * time,
            _ => velocity,
        }
    }
}

/// Everything the last query looked at, for the debug overlay.
#[derive(Clone, Default, Debug)]
pub struct CollisionTrace {
    pub ship: Aabb,
    pub projected_ship: Aabb,
    pub tiles: FixedVec<CellIndex, 8>,
    pub bounds: FixedVec<Aabb, 32>,
}

impl CollisionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(
        &mut self,
        ship: Aabb,
        projected_ship: Aabb,
        tiles: &[CellIndex],
        bounds: &[Aabb],
    ) {
        self.ship = ship;
        self.projected_ship = projected_ship;
        self.tiles.clear();
        self.tiles.extend_from_slice(tiles);
        self.bounds.clear();
        self.bounds.extend_from_slice(bounds);
    }
}

/// Finds what the ship with its corner at `position` hits while moving by
/// `velocity` over `grid`.
///
/// `previous_velocity` is last step's motion and only shows up in
/// [`CollideResult::Already`]. When `trace` is given it is overwritten with
/// the ship boxes, candidate cells and candidate boxes of this query.
pub fn collide(
    position: Vector3D<Number>,
    velocity: Vector3D<Number>,
    previous_velocity: Vector3D<Number>,
    grid: &[Row],
    trace: Option<&mut CollisionTrace>,
) -> CollideResult {
    let ship = Aabb::from_corner(position, SHIP_SIZE);
    let projected_ship = ship.translate(velocity);

    let mut tiles = FixedVec::<CellIndex, 8>::new();
    select_tiles(position + velocity, &mut tiles);
    if tiles.is_empty() {
        log::debug!("ship fell off the track at {:?}", position + velocity);
        if let Some(trace) = trace {
            trace.record(ship, projected_ship, &[], &[]);
        }
        return CollideResult::FellOff;
    }

    select_tiles(position, &mut tiles);
    tiles.sort_unstable();
    tiles.dedup();

    let mut bounds = FixedVec::<Aabb, 32>::new();
    let mut origins = FixedVec::<CellIndex, 32>::new();
    for &tile in tiles.iter() {
        make_bounds(tile, grid, &mut bounds);
        while origins.len() < bounds.len() {
            origins.push(tile);
        }
    }

    if let Some(trace) = trace {
        trace.record(ship, projected_ship, &tiles, &bounds);
    }

    let mut contacts = 0;
    let mut governing = SweepOutcome::Never;
    for (index, candidate) in bounds.iter().enumerate() {
        let outcome = sweep_collide(candidate, &ship, velocity, index);
        if outcome != SweepOutcome::Never {
            contacts += 1;
        }
        governing = governing.min(outcome);
    }

    log::trace!(
        "{} tiles, {} boxes, {} contacts: {:?}",
        tiles.len(),
        bounds.len(),
        contacts,
        governing
    );

    match governing {
        SweepOutcome::Already { index } => CollideResult::Already {
            bounds: bounds[index],
            ship: ship.translate(-previous_velocity),
            tile: origins[index],
            previous_velocity,
        },
        SweepOutcome::From { time, axis, .. } => CollideResult::Correction { time, axis },
        SweepOutcome::Never => CollideResult::None,
    }
}
