//! DDA grid raycasting
//!
//! Walks a ray through a tile grid one cell boundary at a time, always
//! crossing whichever boundary (vertical or horizontal) is nearer along the
//! ray. The accumulated ray length per axis tells us which one that is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// First occupied cell found by [`cast_ray`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Tile coordinates of the occupied cell
    pub cell: (i32, i32),
    /// Point where the ray enters the cell (grid units)
    pub point: Vec2,
    /// Ray length from origin to `point` (grid units)
    pub distance: f32,
}

/// Per-axis ray length covered when crossing one whole cell
///
/// An axis the ray never moves along gets an infinite step so the traversal
/// never picks it.
#[inline]
fn unit_step_size(dir: Vec2) -> Vec2 {
    let x = if dir.x != 0.0 {
        (1.0 + (dir.y / dir.x) * (dir.y / dir.x)).sqrt()
    } else {
        f32::INFINITY
    };
    let y = if dir.y != 0.0 {
        (1.0 + (dir.x / dir.y) * (dir.x / dir.y)).sqrt()
    } else {
        f32::INFINITY
    };
    Vec2::new(x, y)
}

/// Step direction and initial ray length to the first boundary on one axis
#[inline]
fn axis_setup(origin: f32, dir: f32, unit_step: f32) -> (f32, f32) {
    let frac = origin - origin.floor();
    if dir < 0.0 {
        (-1.0, frac * unit_step)
    } else {
        (1.0, (1.0 - frac) * unit_step)
    }
}

/// Cast a ray through `grid` and return the first occupied cell it enters.
///
/// `origin` and `max_distance` are in grid units (one unit per tile). The
/// direction does not need to be normalized; a zero-length or non-finite
/// direction is treated as "no hit".
///
/// The cell containing `origin` is never tested: the walk always crosses one
/// boundary before looking at the grid, so a ray starting inside an occupied
/// tile reports the next occupied tile along its path instead.
///
/// When both axes reach a boundary at exactly the same length (a corner),
/// the Y axis is crossed first.
pub fn cast_ray(grid: &Grid, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
    let dir = direction.try_normalize()?;

    let unit_step = unit_step_size(dir);
    let (step_x, len_x) = axis_setup(origin.x, dir.x, unit_step.x);
    let (step_y, len_y) = axis_setup(origin.y, dir.y, unit_step.y);
    let step = Vec2::new(step_x, step_y);
    let mut ray_length = Vec2::new(len_x, len_y);

    let width = grid.width() as f32;
    let height = grid.height() as f32;

    // Tracked as a float position so out-of-range checks see negatives
    // before truncation folds them into column/row 0
    let mut check = origin;
    let mut distance = 0.0;

    while distance < max_distance {
        if ray_length.x < ray_length.y {
            check.x += step.x;
            distance = ray_length.x;
            ray_length.x += unit_step.x;
        } else {
            check.y += step.y;
            distance = ray_length.y;
            ray_length.y += unit_step.y;
        }

        if check.x >= 0.0 && check.x < width && check.y >= 0.0 && check.y < height {
            let cell = (check.x as i32, check.y as i32);
            if grid.is_occupied(cell.0, cell.1) {
                return Some(RayHit {
                    cell,
                    point: origin + dir * distance,
                    distance,
                });
            }
        } else if leaving(check.x, step.x, width) || leaving(check.y, step.y, height) {
            // Outside and heading further out: nothing left to hit
            return None;
        }
    }

    None
}

/// Off the grid on this axis and stepping away from it
#[inline]
fn leaving(pos: f32, step: f32, size: f32) -> bool {
    (pos < 0.0 && step < 0.0) || (pos >= size && step > 0.0)
}
