// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for paint-calculator
//!
//! Provides deterministic wall inputs shared by the integration suites.

#![allow(dead_code)]

use paint_calculator::service::{PaintBudgetRequest, WallSpec};

/// 5 x 5 wall with one standard door and one standard window (21.08 m² net)
pub fn furnished_wall() -> WallSpec {
    WallSpec::new(5.0, 5.0).with_doors(1).with_windows(1)
}

/// Largest accepted wall without openings (50 m²)
pub fn largest_wall() -> WallSpec {
    WallSpec::new(10.0, 5.0)
}

/// Request with `count` copies of [`furnished_wall`]
pub fn furnished_room(count: usize) -> PaintBudgetRequest {
    PaintBudgetRequest::new(vec![furnished_wall(); count])
}

/// JSON body for a single furnished wall, as a requester would send it
pub const FURNISHED_WALL_JSON: &str =
    r#"{"walls":[{"width":5,"height":5,"door_quantity":1,"window_quantity":1}]}"#;
