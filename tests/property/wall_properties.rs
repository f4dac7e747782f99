// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Wall and Room Invariants

use paint_calculator::domain::{Opening, Room, ValidationError, Wall};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Dimensions whose area lands in the accepted [2.5, 50] range
fn valid_dimensions() -> impl Strategy<Value = (f64, f64)> {
    (0.5f64..10.0, 0.5f64..10.0).prop_filter("area must be paintable", |(w, h)| {
        let area = w * h;
        (2.5..=50.0).contains(&area)
    })
}

/// Walls at least 2.2 m tall, so a door always clears
fn door_friendly_dimensions() -> impl Strategy<Value = (f64, f64)> {
    (1.2f64..10.0, 2.2f64..5.0)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Valid dimensions always build a wall with gross area w·h
    #[test]
    fn prop_valid_dimensions_build_wall((width, height) in valid_dimensions()) {
        let wall = Wall::new(width, height).unwrap();
        prop_assert_eq!(wall.gross_area(), width * height);
        prop_assert_eq!(wall.net_area(), width * height);
    }

    /// Property: Areas below 1 m² are out of range, never a paint unit error
    #[test]
    fn prop_tiny_area_out_of_range(width in 0.0f64..1.0, height in 0.0f64..0.99) {
        let result = Wall::new(width, height);
        let is_out_of_range = matches!(result, Err(ValidationError::AreaOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    /// Property: Areas above 50 m² are out of range
    #[test]
    fn prop_huge_area_out_of_range(width in 7.1f64..100.0, height in 7.1f64..100.0) {
        let result = Wall::new(width, height);
        let is_out_of_range = matches!(result, Err(ValidationError::AreaOutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }

    /// Property: Areas in [1, 2.5) need less than the smallest container
    #[test]
    fn prop_small_area_below_paint_unit(width in 1.0f64..1.2, height in 1.0f64..2.0) {
        prop_assume!(width * height < 2.5);
        let result = Wall::new(width, height);
        let is_below_unit = matches!(result, Err(ValidationError::BelowMinimumPaintUnit { .. }));
        prop_assert!(is_below_unit);
    }

    /// Property: A door on a wall shorter than door height + 0.3 always fails
    /// with a clearance error, whatever the coverage would be
    #[test]
    fn prop_low_wall_rejects_doors(
        width in 2.0f64..20.0,
        height in 1.3f64..2.19,
        doors in 1i64..50,
    ) {
        let mut wall = match Wall::new(width, height) {
            Ok(wall) => wall,
            Err(_) => return Ok(()),
        };
        prop_assume!(height - Opening::DOOR_HEIGHT < 0.3);

        let result = wall.add_doors(doors);
        let is_clearance = matches!(result, Err(ValidationError::DoorClearanceViolation { .. }));
        prop_assert!(is_clearance);
        prop_assert!(wall.doors().is_empty());
    }

    /// Property: Openings are rejected exactly when they cover more than
    /// half of the wall including the openings
    #[test]
    fn prop_coverage_rule(
        (width, height) in door_friendly_dimensions(),
        doors in 0i64..6,
        windows in 0i64..6,
    ) {
        let mut wall = Wall::new(width, height).unwrap();
        let gross = wall.gross_area();
        let openings =
            doors as f64 * Opening::door().area() + windows as f64 * Opening::window().area();
        prop_assume!((openings - 0.5 * gross).abs() > 1e-9);

        let result = wall.add_doors(doors).and_then(|_| wall.add_windows(windows));
        let net = gross - openings;

        if openings > 0.5 * (net + openings) {
            let is_exceeded = matches!(result, Err(ValidationError::OpeningAreaExceeded { .. }));
            prop_assert!(is_exceeded);
        } else {
            prop_assert!(result.is_ok());
            prop_assert!((wall.net_area() - net).abs() < 1e-9);
        }
    }

    /// Property: The first four walls are accepted and a fifth is not
    #[test]
    fn prop_room_holds_four_walls(
        walls in prop::collection::vec(valid_dimensions(), 5),
    ) {
        let mut room = Room::new();
        for (width, height) in &walls[..4] {
            prop_assert!(room.add_wall(Wall::new(*width, *height).unwrap()).is_ok());
        }

        let (width, height) = walls[4];
        let result = room.add_wall(Wall::new(width, height).unwrap());
        prop_assert_eq!(result, Err(ValidationError::TooManyWalls { count: 5 }));
    }
}
