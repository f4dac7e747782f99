// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Validation Functions - Domain Invariants
//!
//! This module contains every business rule enforced while building a room
//! for a paint budget. All functions are pure (no side effects) and return a
//! [`ValidationError`] naming the violated rule.
//!
//! # Invariant Categories
//!
//! 1. **Wall Geometry**: non-negative sides, area range, minimum paint unit
//! 2. **Opening Counts**: door and window counts cannot be negative
//! 3. **Opening Placement**: door clearance and opening coverage
//! 4. **Room Structure**: wall count limits

/// Maximum number of walls a room may hold
pub const MAX_ROOM_WALLS: usize = 4;

/// Smallest accepted gross wall area in square meters
pub const MIN_WALL_AREA: f64 = 1.0;

/// Largest accepted gross wall area in square meters
pub const MAX_WALL_AREA: f64 = 50.0;

/// Square meters painted by one liter of paint
pub const SQUARE_METERS_PER_LITER: f64 = 5.0;

/// A wall must need at least this many liters (the smallest container)
pub const MIN_WALL_PAINT_LITERS: f64 = 0.5;

/// Required vertical gap between the top of a door and the wall height
pub const MIN_DOOR_CLEARANCE: f64 = 0.3;

/// Maximum share of the gross wall area that openings may cover
pub const MAX_OPENING_COVERAGE: f64 = 0.5;

/// Validation result with detailed error information
pub type ValidationResult = Result<(), ValidationError>;

/// Validation error naming the violated rule
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Wall width below zero
    #[error("invalid wall size: wall width cannot be less than 0 (got {width})")]
    NegativeWidth { width: f64 },

    /// Wall height below zero
    #[error("invalid wall size: wall height cannot be less than 0 (got {height})")]
    NegativeHeight { height: f64 },

    /// Gross wall area outside [1, 50] square meters
    #[error("invalid wall size: a wall must have between 1 and 50 square meters (got {area})")]
    AreaOutOfRange { area: f64 },

    /// Wall needs less paint than the smallest container holds
    #[error("the wall area must need at least the smallest paint container of 0.5L (needs {liters}L)")]
    BelowMinimumPaintUnit { liters: f64 },

    /// Door count below zero
    #[error("the number of doors cannot be less than zero (got {count})")]
    NegativeDoorCount { count: i64 },

    /// Window count below zero
    #[error("the number of windows cannot be less than zero (got {count})")]
    NegativeWindowCount { count: i64 },

    /// Wall not at least 30 cm taller than a door
    #[error("the wall must be at least 30 centimeters taller than the door (wall {wall_height}m, door {door_height}m)")]
    DoorClearanceViolation { wall_height: f64, door_height: f64 },

    /// Doors and windows cover more than half the wall
    #[error("the total area of doors and windows must not exceed 50% of the wall area ({opening_area} of {wall_area} square meters)")]
    OpeningAreaExceeded { opening_area: f64, wall_area: f64 },

    /// Room already holds the maximum number of walls
    #[error("a room cannot have more than 4 walls (got {count})")]
    TooManyWalls { count: usize },

    /// Request carried no walls at all
    #[error("at least 1 wall is required")]
    NoWalls,
}

/// Liters needed to paint an area at the fixed coverage rate
pub fn liters_for_area(area: f64) -> f64 {
    area / SQUARE_METERS_PER_LITER
}

/// Validate raw wall dimensions
///
/// # Rules (first failure wins)
/// - Width must not be negative
/// - Height must not be negative
/// - Gross area must lie in [1, 50] square meters
/// - Gross area must need at least 0.5 liters of paint
pub fn validate_wall_dimensions(width: f64, height: f64) -> ValidationResult {
    if width < 0.0 {
        return Err(ValidationError::NegativeWidth { width });
    }

    if height < 0.0 {
        return Err(ValidationError::NegativeHeight { height });
    }

    let area = width * height;
    if !(MIN_WALL_AREA..=MAX_WALL_AREA).contains(&area) {
        return Err(ValidationError::AreaOutOfRange { area });
    }

    let liters = liters_for_area(area);
    if liters < MIN_WALL_PAINT_LITERS {
        return Err(ValidationError::BelowMinimumPaintUnit { liters });
    }

    Ok(())
}

/// Validate a requested door count
pub fn validate_door_count(count: i64) -> ValidationResult {
    if count < 0 {
        return Err(ValidationError::NegativeDoorCount { count });
    }
    Ok(())
}

/// Validate a requested window count
pub fn validate_window_count(count: i64) -> ValidationResult {
    if count < 0 {
        return Err(ValidationError::NegativeWindowCount { count });
    }
    Ok(())
}

/// Validate that a door fits under the wall with enough clearance
///
/// # Rules
/// - `wall_height - door_height >= 0.3`
pub fn validate_door_clearance(wall_height: f64, door_height: f64) -> ValidationResult {
    if wall_height - door_height < MIN_DOOR_CLEARANCE {
        return Err(ValidationError::DoorClearanceViolation {
            wall_height,
            door_height,
        });
    }
    Ok(())
}

/// Validate opening coverage against the wall area including the openings
///
/// `net_area` is the paintable area left after subtracting openings, so the
/// denominator is the wall's gross area.
pub fn validate_opening_coverage(net_area: f64, opening_area: f64) -> ValidationResult {
    let wall_area = net_area + opening_area;
    if opening_area > MAX_OPENING_COVERAGE * wall_area {
        return Err(ValidationError::OpeningAreaExceeded {
            opening_area,
            wall_area,
        });
    }
    Ok(())
}

/// Validate the number of walls a room holds
pub fn validate_wall_count(count: usize) -> ValidationResult {
    if count > MAX_ROOM_WALLS {
        return Err(ValidationError::TooManyWalls { count });
    }
    Ok(())
}
