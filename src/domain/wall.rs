// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wall Entity with Geometry and Opening Invariants

use serde::{Deserialize, Serialize};

use super::invariants::{
    validate_door_clearance, validate_door_count, validate_opening_coverage,
    validate_wall_dimensions, validate_window_count, ValidationError, ValidationResult,
    MAX_OPENING_COVERAGE,
};
use super::{Opening, OpeningKind};

/// Rectangular wall owning its doors and windows
///
/// # Invariants
/// - Width and height are not negative
/// - Gross area lies in [1, 50] square meters
/// - Gross area needs at least 0.5 liters of paint
/// - Every door leaves at least 0.3 m between its top and the wall height
/// - Doors and windows cover at most half of the gross area
///
/// Opening rules are checked against the state the wall would have after the
/// openings are added; a rejected call leaves the wall unchanged.
///
/// # Examples
///
/// ```rust
/// use paint_calculator::domain::Wall;
///
/// let mut wall = Wall::new(5.0, 5.0).unwrap();
/// wall.add_doors(1).unwrap();
/// wall.add_windows(1).unwrap();
/// assert!((wall.net_area() - 21.08).abs() < 1e-9);
///
/// assert!(Wall::new(0.5, 0.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    width: f64,
    height: f64,
    doors: Vec<Opening>,
    windows: Vec<Opening>,
}

impl Wall {
    /// Create a wall with validated dimensions and no openings
    pub fn new(width: f64, height: f64) -> Result<Self, ValidationError> {
        validate_wall_dimensions(width, height)?;

        Ok(Self {
            width,
            height,
            doors: Vec::new(),
            windows: Vec::new(),
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn doors(&self) -> &[Opening] {
        &self.doors
    }

    pub fn windows(&self) -> &[Opening] {
        &self.windows
    }

    /// Area of the bare rectangle
    pub fn gross_area(&self) -> f64 {
        self.width * self.height
    }

    /// Combined area of all doors and windows
    pub fn opening_area(&self) -> f64 {
        let doors: f64 = self.doors.iter().map(Opening::area).sum();
        let windows: f64 = self.windows.iter().map(Opening::area).sum();
        doors + windows
    }

    /// Paintable area: gross area minus every opening
    ///
    /// Not clamped at zero.
    pub fn net_area(&self) -> f64 {
        self.gross_area() - self.opening_area()
    }

    /// Add `count` standard doors
    ///
    /// # Rules
    /// - `count` must not be negative
    /// - Each door must leave 0.3 m of clearance below the wall top
    /// - Openings must not exceed half of the gross area
    pub fn add_doors(&mut self, count: i64) -> ValidationResult {
        validate_door_count(count)?;
        self.add_openings(OpeningKind::Door, count)
    }

    /// Add `count` standard windows
    ///
    /// # Rules
    /// - `count` must not be negative
    /// - Openings must not exceed half of the gross area
    pub fn add_windows(&mut self, count: i64) -> ValidationResult {
        validate_window_count(count)?;
        self.add_openings(OpeningKind::Window, count)
    }

    fn add_openings(&mut self, kind: OpeningKind, count: i64) -> ValidationResult {
        let template = Opening::of_kind(kind);
        let count = usize::try_from(count).unwrap_or(usize::MAX);

        if kind == OpeningKind::Door {
            let added = std::iter::repeat(template).take(count.min(1));
            for door in self.doors.iter().copied().chain(added) {
                validate_door_clearance(self.height, door.height())?;
            }
        }

        self.validate_coverage_with(template, count)?;

        let target = match kind {
            OpeningKind::Door => &mut self.doors,
            OpeningKind::Window => &mut self.windows,
        };
        target.extend(std::iter::repeat(template).take(count));
        Ok(())
    }

    /// Coverage rule for the current openings plus `count` more of `extra`
    fn validate_coverage_with(&self, extra: Opening, count: usize) -> ValidationResult {
        let gross = self.gross_area();
        let limit = MAX_OPENING_COVERAGE * gross;

        let existing = self.doors.iter().chain(&self.windows).copied();
        let added = std::iter::repeat(extra).take(count);

        let mut opening_area = 0.0;
        for opening in existing.chain(added) {
            opening_area += opening.area();
            // Already over the limit; more openings cannot bring it back.
            if opening_area > limit {
                break;
            }
        }

        validate_opening_coverage(gross - opening_area, opening_area)
    }
}
