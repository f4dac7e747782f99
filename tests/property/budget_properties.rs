// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Paint Budget
//!
//! The greedy pass must always buy enough paint, overshoot by less than one
//! small can, and list containers from the largest size down.

use paint_calculator::domain::{
    allocate_containers, liters_for_area, ContainerCounts, ContainerSize, PaintBudgetCalculator,
};
use paint_calculator::service::{assemble_room, calculate_budget, PaintBudgetRequest, WallSpec};
use proptest::prelude::*;

/// Float slack for remainders carried through `%`
const EPSILON: f64 = 1e-9;

// ============================================================================
// Strategies
// ============================================================================

/// Wall input that always has valid geometry and clears a door
fn wall_spec() -> impl Strategy<Value = WallSpec> {
    (1.2f64..10.0, 2.2f64..5.0, 0i64..3, 0i64..3).prop_map(|(width, height, doors, windows)| {
        WallSpec::new(width, height)
            .with_doors(doors)
            .with_windows(windows)
    })
}

fn room_request() -> impl Strategy<Value = PaintBudgetRequest> {
    prop::collection::vec(wall_spec(), 1..=4).prop_map(PaintBudgetRequest::new)
}

fn capacity(containers: &[ContainerSize]) -> f64 {
    containers.iter().map(|c| c.liters()).sum()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Allocation covers the volume and overshoots by less than 0.5 L
    #[test]
    fn prop_allocation_bounds(liters in 0.0f64..200.0) {
        let containers = allocate_containers(liters);
        let total = capacity(&containers);

        prop_assert!(total >= liters - EPSILON, "total {} < liters {}", total, liters);
        prop_assert!(total - liters < 0.5 + EPSILON, "overshoot {} for {}", total - liters, liters);
    }

    /// Property: Containers come out largest first
    #[test]
    fn prop_allocation_descending(liters in 0.0f64..200.0) {
        let containers = allocate_containers(liters);
        for pair in containers.windows(2) {
            prop_assert!(pair[0].liters() >= pair[1].liters());
        }
    }

    /// Property: The allocation is deterministic
    #[test]
    fn prop_allocation_deterministic(liters in 0.0f64..200.0) {
        prop_assert_eq!(allocate_containers(liters), allocate_containers(liters));
    }

    /// Property: Every size above the smallest takes all whole cans that fit
    #[test]
    fn prop_greedy_takes_whole_large_cans(liters in 0.0f64..200.0) {
        let counts = ContainerCounts::from_containers(&allocate_containers(liters));
        let after_extra_large = liters - counts.extra_large as f64 * 18.0;
        prop_assert!(after_extra_large < 18.0 + EPSILON);

        let after_large = after_extra_large - counts.large as f64 * 3.6;
        prop_assert!(after_large < 3.6 + EPSILON);

        let after_medium = after_large - counts.medium as f64 * 2.5;
        prop_assert!(after_medium < 2.5 + EPSILON);
    }

    /// Property: Budgets for any valid room respect the room's net area
    #[test]
    fn prop_room_budget_bounds(request in room_request()) {
        let room = match assemble_room(&request.walls) {
            Ok(room) => room,
            Err(_) => return Ok(()),
        };
        let liters = liters_for_area(room.total_area());

        let containers = PaintBudgetCalculator::new().calculate(&room);
        let total = capacity(&containers);
        prop_assert!(total >= liters - EPSILON);
        prop_assert!(total - liters < 0.5 + EPSILON);

        let counts = calculate_budget(&request).unwrap();
        prop_assert_eq!(counts, ContainerCounts::from_containers(&containers));
        prop_assert!((counts.total_liters() - total).abs() < EPSILON);
    }
}
