// Copyright (c) 2025 - Cowboy AI, Inc.
//! Request Assembler
//!
//! Turns raw per-wall input into a validated [`Room`]. Validation is fail
//! fast and runs in a fixed order:
//!
//! ```text
//! walls present?            → NoWalls
//! for each wall, in order:  construct → add to room (TooManyWalls)
//! for each wall, in order:  doors → windows
//! ```
//!
//! Every wall is constructed before any opening is placed, so a bad size on
//! the last wall wins over a bad door count on the first.

use serde::{Deserialize, Serialize};

use crate::domain::{Room, ValidationError, Wall};

/// Raw input for one wall
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WallSpec {
    /// Wall width in meters
    #[serde(default)]
    pub width: f64,

    /// Wall height in meters
    #[serde(default)]
    pub height: f64,

    /// Number of standard doors
    #[serde(default, rename = "door_quantity", alias = "door_count")]
    pub door_count: i64,

    /// Number of standard windows
    #[serde(default, rename = "window_quantity", alias = "window_count")]
    pub window_count: i64,
}

impl WallSpec {
    /// Bare wall without openings
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            door_count: 0,
            window_count: 0,
        }
    }

    pub fn with_doors(mut self, count: i64) -> Self {
        self.door_count = count;
        self
    }

    pub fn with_windows(mut self, count: i64) -> Self {
        self.window_count = count;
        self
    }
}

/// Paint budget request: the walls of one room
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaintBudgetRequest {
    #[serde(default)]
    pub walls: Vec<WallSpec>,
}

impl PaintBudgetRequest {
    pub fn new(walls: Vec<WallSpec>) -> Self {
        Self { walls }
    }
}

/// Build a validated room from raw wall input
///
/// Returns the first validation error; a partially built room is never
/// handed back.
pub fn assemble_room(walls: &[WallSpec]) -> Result<Room, ValidationError> {
    if walls.is_empty() {
        return Err(ValidationError::NoWalls);
    }

    let mut room = Room::new();
    for spec in walls {
        let wall = Wall::new(spec.width, spec.height)?;
        room.add_wall(wall)?;
    }

    for (wall, spec) in room.walls_mut().iter_mut().zip(walls) {
        wall.add_doors(spec.door_count)?;
        wall.add_windows(spec.window_count)?;
    }

    Ok(room)
}
