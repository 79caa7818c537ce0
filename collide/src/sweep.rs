use util::{Aabb, Axis, Number, Vector3D};

/// Per-axis entry time of an axis that already overlaps at `t = 0`.
pub const ALREADY: Number = Number::from_raw(-(1 << 12));
/// Entry time of boxes that touch exactly: contact comes right after now.
pub const INFINITESIMAL: Number = Number::from_raw(1);
/// Exit time of an overlapping axis with no motion along it.
pub const NEVER_EXITS: Number = Number::from_raw(i32::MAX);

const ONE: Number = Number::from_raw(1 << 12);

/// Result of sweeping one box against one static candidate.
///
/// The derived order is the priority used to pick the governing contact: any
/// existing overlap (lowest index first) beats any future contact, future
/// contacts order by time then index, and `Never` comes last.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum SweepOutcome {
    Already { index: usize },
    From { time: Number, index: usize, axis: Axis },
    Never,
}

impl SweepOutcome {
    pub fn index(self) -> Option<usize> {
        match self {
            SweepOutcome::Already { index } | SweepOutcome::From { index, .. } => Some(index),
            SweepOutcome::Never => None,
        }
    }
}

/// Sweeps `b` with `velocity` over one step against the stationary `a`.
///
/// Two moving boxes can be handled by sweeping in the reference frame of
/// `a`. `index` is echoed back so callers can map the outcome to a candidate.
pub fn sweep_collide(a: &Aabb, b: &Aabb, velocity: Vector3D<Number>, index: usize) -> SweepOutcome {
    let zero = Number::new(0);
    let mut entry = Vector3D::splat(ALREADY);
    let mut exit = Vector3D::splat(NEVER_EXITS);

    for axis in Axis::ALL {
        let speed = velocity[axis];
        let (a_min, a_max) = (a.min[axis], a.max[axis]);
        let (b_min, b_max) = (b.min[axis], b.max[axis]);

        if b_max <= a_min {
            if speed <= zero {
                return SweepOutcome::Never;
            }
            let per_unit = ONE / speed;
            let gap = a_min - b_max;
            entry[axis] = if gap == zero { INFINITESIMAL } else { gap * per_unit };
            exit[axis] = (a_max - b_min) * per_unit;
        } else if b_min >= a_max {
            if speed >= zero {
                return SweepOutcome::Never;
            }
            let per_unit = ONE / speed;
            let gap = a_max - b_min;
            entry[axis] = if gap == zero { INFINITESIMAL } else { gap * per_unit };
            exit[axis] = (a_min - b_max) * per_unit;
        } else if speed > zero {
            exit[axis] = (a_max - b_min) * (ONE / speed);
        } else if speed < zero {
            exit[axis] = (a_min - b_max) * (ONE / speed);
        }
    }

    let start = entry.x.max(entry.y).max(entry.z);
    let end = exit.x.min(exit.y).min(exit.z);

    if start == ALREADY {
        return SweepOutcome::Already { index };
    }
    if start > end || start >= ONE {
        return SweepOutcome::Never;
    }

    let axis = Axis::ALL
        .into_iter()
        .find(|&axis| entry[axis] == start)
        .unwrap_or(Axis::X);

    SweepOutcome::From {
        time: start,
        index,
        axis,
    }
}
