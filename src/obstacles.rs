//! Registry of falling obstacles and the collided-set handshake.
//!
//! Detectors (the ship and projectiles) never remove an obstacle.  They mark
//! it collided; the obstacle's own fall task notices the mark on its next
//! step and removes itself.

use std::collections::HashSet;

use crate::entities::{BoundingBox, Obstacle};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(u64);

#[derive(Debug, Default)]
pub struct ObstacleRegistry {
    next_id: u64,
    entries: Vec<(ObstacleId, Obstacle)>,
    collided: HashSet<ObstacleId>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, obstacle: Obstacle) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, obstacle));
        id
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.entries.iter().find(|(key, _)| *key == id).map(|(_, o)| o)
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.get(id).is_some()
    }

    /// Move an obstacle's top edge.  Unknown ids are ignored.
    pub fn move_to(&mut self, id: ObstacleId, row: f64) {
        if let Some((_, obstacle)) = self.entries.iter_mut().find(|(key, _)| *key == id) {
            obstacle.row = row;
        }
    }

    /// Drop an obstacle together with any pending collision mark.
    pub fn remove(&mut self, id: ObstacleId) -> Option<Obstacle> {
        self.collided.remove(&id);
        let pos = self.entries.iter().position(|(key, _)| *key == id)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObstacleId, &Obstacle)> {
        self.entries.iter().map(|(id, o)| (*id, o))
    }

    /// Obstacles not yet consumed by a collision.
    fn live(&self) -> impl Iterator<Item = &(ObstacleId, Obstacle)> {
        self.entries.iter().filter(|(id, _)| !self.collided.contains(id))
    }

    /// First live obstacle sharing at least one cell with `bounds`.
    pub fn find_collision(&self, bounds: &BoundingBox) -> Option<ObstacleId> {
        self.live()
            .find(|(_, o)| o.bounding_box().intersects(bounds))
            .map(|(id, _)| *id)
    }

    /// First live obstacle covering the cell (`row`, `column`).
    pub fn find_hit(&self, row: i32, column: i32) -> Option<ObstacleId> {
        self.live()
            .find(|(_, o)| o.bounding_box().contains(row, column))
            .map(|(id, _)| *id)
    }

    /// Flag an obstacle for self-removal.  Stale ids are a no-op.
    pub fn mark_collided(&mut self, id: ObstacleId) {
        if self.contains(id) {
            self.collided.insert(id);
        }
    }

    pub fn is_collided(&self, id: ObstacleId) -> bool {
        self.collided.contains(&id)
    }

    /// Consume the collision mark, reporting whether one was set.
    pub fn take_collided(&mut self, id: ObstacleId) -> bool {
        self.collided.remove(&id)
    }
}
