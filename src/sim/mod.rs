//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches rendering,
//! audio or the platform:
//! - Grid raycasting for the raycast demo
//! - Fixed-capacity entity pool
//! - AABB collisions, Pong state machine and enemy AI
//! - Seeded RNG only

pub mod ai;
pub mod collision;
pub mod entity;
pub mod grid;
pub mod raycast;
pub mod state;
pub mod tick;

pub use ai::{EnemyAi, predict_ball_y};
pub use collision::{Aabb, bounce_off_paddle, entities_overlap, overlaps};
pub use entity::{Entity, EntityHandle, EntityKind, EntityPool};
pub use grid::{Cell, Grid};
pub use raycast::{RayHit, cast_ray};
pub use state::{Button, PongVariant, Side, UxState, World, restart_button, start_button};
pub use tick::{GameEvent, TickInput, tick};
