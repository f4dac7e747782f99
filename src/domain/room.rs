// Copyright (c) 2025 - Cowboy AI, Inc.
//! Room Aggregate - ordered walls with a wall count limit

use serde::{Deserialize, Serialize};

use super::invariants::{validate_wall_count, ValidationResult};
use super::Wall;

/// Ordered collection of walls to be painted
///
/// # Invariants
/// - At most four walls
///
/// [`Room::add_wall`] appends before checking the limit, so a room that
/// returned an error already contains the offending wall and must be
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    walls: Vec<Wall>,
}

impl Room {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a wall, then enforce the wall count limit
    pub fn add_wall(&mut self, wall: Wall) -> ValidationResult {
        self.walls.push(wall);
        validate_wall_count(self.walls.len())
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Mutable access for adding openings after every wall is in place
    pub fn walls_mut(&mut self) -> &mut [Wall] {
        &mut self.walls
    }

    /// Sum of every wall's net (paintable) area
    pub fn total_area(&self) -> f64 {
        self.walls.iter().map(Wall::net_area).sum()
    }
}
