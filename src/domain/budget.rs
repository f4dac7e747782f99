// Copyright (c) 2025 - Cowboy AI, Inc.
//! Paint Budget Calculator
//!
//! Converts a room's paintable area into liters and splits that volume into
//! containers with a fixed greedy pass:
//!
//! ```text
//! liters = total net area / 5
//! 18.0 → floor, carry remainder
//!  3.6 → floor, carry remainder
//!  2.5 → floor, carry remainder
//!  0.5 → ceil (covers whatever is left)
//! ```
//!
//! The pass is not a minimal-container search; the order and rounding are
//! part of the observable output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::invariants::liters_for_area;
use super::{ContainerSize, Room};

/// Stateless calculator producing the container list for a room
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintBudgetCalculator;

impl PaintBudgetCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Containers needed for the room, largest size first
    pub fn calculate(&self, room: &Room) -> Vec<ContainerSize> {
        let area = room.total_area();
        let liters = liters_for_area(area);
        let containers = allocate_containers(liters);

        debug!(
            area,
            liters,
            containers = containers.len(),
            "Computed paint budget"
        );

        containers
    }
}

/// Greedy split of a paint volume into containers
///
/// Every size except the smallest takes as many whole containers as fit and
/// hands the remainder down. The smallest size rounds the rest up, so the
/// result always holds at least `liters` and overshoots by less than 0.5.
pub fn allocate_containers(liters: f64) -> Vec<ContainerSize> {
    let smallest = ContainerSize::smallest();
    let mut remaining = liters;
    let mut containers = Vec::new();

    for size in ContainerSize::DESCENDING {
        let capacity = size.liters();

        let count = if size == smallest {
            if remaining > 0.0 {
                (remaining / capacity).ceil()
            } else {
                0.0
            }
        } else {
            let remainder = remaining % capacity;
            // Derive the count from the remainder so both always agree
            let whole = ((remaining - remainder) / capacity).round();
            remaining = remainder;
            whole
        };

        containers.extend(std::iter::repeat(size).take(count as usize));
    }

    containers
}

/// Per-size container counts
///
/// Serialized with the wire labels of [`ContainerSize::label`]; every size
/// is always present, zero counts included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCounts {
    #[serde(rename = "huge_can")]
    pub extra_large: u64,
    #[serde(rename = "big_can")]
    pub large: u64,
    #[serde(rename = "medium_can")]
    pub medium: u64,
    #[serde(rename = "small_can")]
    pub small: u64,
}

impl ContainerCounts {
    /// Tally a container list
    pub fn from_containers(containers: &[ContainerSize]) -> Self {
        let mut counts = Self::default();
        for container in containers {
            *counts.slot_mut(*container) += 1;
        }
        counts
    }

    pub fn get(&self, size: ContainerSize) -> u64 {
        match size {
            ContainerSize::ExtraLarge => self.extra_large,
            ContainerSize::Large => self.large,
            ContainerSize::Medium => self.medium,
            ContainerSize::Small => self.small,
        }
    }

    fn slot_mut(&mut self, size: ContainerSize) -> &mut u64 {
        match size {
            ContainerSize::ExtraLarge => &mut self.extra_large,
            ContainerSize::Large => &mut self.large,
            ContainerSize::Medium => &mut self.medium,
            ContainerSize::Small => &mut self.small,
        }
    }

    /// Combined capacity in liters
    pub fn total_liters(&self) -> f64 {
        ContainerSize::DESCENDING
            .iter()
            .map(|size| self.get(*size) as f64 * size.liters())
            .sum()
    }

    pub fn total_containers(&self) -> u64 {
        self.extra_large + self.large + self.medium + self.small
    }
}
