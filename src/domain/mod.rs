// Copyright (c) 2025 - Cowboy AI, Inc.
//! Paint Domain Models
//!
//! Core domain concepts for sizing a paint purchase: validated wall geometry,
//! fixed-size openings, rooms and the container budget.
//!
//! # Value Objects with Invariants
//!
//! - [`Opening`] - Standard door (0.8 x 1.9) or window (2.0 x 1.2)
//! - [`ContainerSize`] - Paint can denominations (18, 3.6, 2.5, 0.5 liters)
//!
//! # Entities
//!
//! - [`Wall`] - Rectangle in [1, 50] m² with door clearance and opening coverage rules
//! - [`Room`] - Up to four walls; total paintable area
//!
//! # Calculation
//!
//! - [`PaintBudgetCalculator`] - Greedy split of the required liters into containers

pub mod budget;
pub mod container;
pub mod invariants;
pub mod opening;
pub mod room;
pub mod wall;

pub use budget::{allocate_containers, ContainerCounts, PaintBudgetCalculator};
pub use container::ContainerSize;
pub use invariants::{liters_for_area, ValidationError, ValidationResult};
pub use opening::{Opening, OpeningKind};
pub use room::Room;
pub use wall::Wall;
