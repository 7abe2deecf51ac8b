//! Fixed-capacity entity pool
//!
//! Entities live in a flat array allocated once up front. Allocation is a
//! linear scan for the first free slot; freeing clears the slot so it can be
//! handed out again immediately. Each slot also counts how many times it has
//! been freed, and handles remember that count, so a handle to a freed (or
//! freed-and-reused) slot resolves to `None` instead of someone else's entity.

use glam::{Vec2, Vec4};
use serde::{Deserialize, Serialize};

/// What an entity is. Matched exhaustively by update and render code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Player-controlled paddle (or the template's marker)
    Player,
    Ball,
    /// AI-controlled paddle
    Enemy,
}

/// A simulation object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Centre position in world units
    pub position: Vec2,
    pub velocity: Vec2,
    /// Full width/height
    pub size: Vec2,
    pub color: Vec4,
    pub score: u32,
}

impl Entity {
    /// Blank entity of the given kind (everything else zeroed)
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: Vec2::ZERO,
            color: Vec4::ZERO,
            score: 0,
        }
    }
}

/// Reference to a pool slot, valid until that slot is freed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityHandle {
    index: usize,
    generation: u32,
}

impl EntityHandle {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

/// Fixed-capacity entity storage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityPool {
    slots: Box<[Slot]>,
    live: usize,
}

impl EntityPool {
    /// Create a pool with `capacity` free slots
    pub fn new(capacity: usize) -> Self {
        let slots: Vec<Slot> = (0..capacity).map(|_| Slot::default()).collect();
        Self {
            slots: slots.into_boxed_slice(),
            live: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of valid entities
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    pub fn free_count(&self) -> usize {
        self.capacity() - self.live
    }

    /// Claim the first free slot for a new entity of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if every slot is in use.
    pub fn allocate(&mut self, kind: EntityKind) -> EntityHandle {
        let Some(index) = self.slots.iter().position(|s| s.entity.is_none()) else {
            log::error!("Entity pool exhausted ({} slots)", self.capacity());
            panic!("No more free entities!");
        };

        let slot = &mut self.slots[index];
        slot.entity = Some(Entity::new(kind));
        self.live += 1;

        EntityHandle {
            index,
            generation: slot.generation,
        }
    }

    /// Release an entity. Returns false if the handle was already stale.
    pub fn free(&mut self, handle: EntityHandle) -> bool {
        let Some(slot) = self.slots.get_mut(handle.index) else {
            return false;
        };
        if slot.generation != handle.generation || slot.entity.is_none() {
            return false;
        }

        slot.entity = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.live -= 1;
        true
    }

    /// Look up a live entity
    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        self.slots
            .get(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.entity.as_ref())
    }

    /// Look up a live entity mutably
    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.slots
            .get_mut(handle.index)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.entity.as_mut())
    }

    /// Live entities in slot order. Rescans the array on every call.
    pub fn iter_valid(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.slots.iter().filter_map(|s| s.entity.as_ref())
    }

    /// Live entities in slot order, mutably
    pub fn iter_valid_mut(&mut self) -> impl Iterator<Item = &mut Entity> + '_ {
        self.slots.iter_mut().filter_map(|s| s.entity.as_mut())
    }

    /// Free every slot
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if slot.entity.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.live = 0;
    }
}
