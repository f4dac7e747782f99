// Copyright (c) 2025 - Cowboy AI, Inc.
//! Paint Container Sizes

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four paint container denominations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerSize {
    /// 18 liter can
    ExtraLarge,
    /// 3.6 liter can
    Large,
    /// 2.5 liter can
    Medium,
    /// 0.5 liter can
    Small,
}

impl ContainerSize {
    /// Every size, largest first (greedy fill order)
    pub const DESCENDING: [ContainerSize; 4] = [
        ContainerSize::ExtraLarge,
        ContainerSize::Large,
        ContainerSize::Medium,
        ContainerSize::Small,
    ];

    /// Capacity in liters
    pub const fn liters(self) -> f64 {
        match self {
            ContainerSize::ExtraLarge => 18.0,
            ContainerSize::Large => 3.6,
            ContainerSize::Medium => 2.5,
            ContainerSize::Small => 0.5,
        }
    }

    /// The smallest size, which rounds up whatever volume is left
    pub const fn smallest() -> Self {
        ContainerSize::Small
    }

    /// Label used on the wire
    pub const fn label(self) -> &'static str {
        match self {
            ContainerSize::ExtraLarge => "huge_can",
            ContainerSize::Large => "big_can",
            ContainerSize::Medium => "medium_can",
            ContainerSize::Small => "small_can",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}L", self.liters())
    }
}
