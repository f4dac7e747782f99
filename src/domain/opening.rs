// Copyright (c) 2025 - Cowboy AI, Inc.
//! Opening Value Object (doors and windows)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of opening cut into a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpeningKind {
    /// Standard door, subject to the clearance rule
    Door,
    /// Standard window
    Window,
}

impl OpeningKind {
    /// Fixed `(width, height)` in meters for this kind
    pub const fn dimensions(self) -> (f64, f64) {
        match self {
            OpeningKind::Door => (Opening::DOOR_WIDTH, Opening::DOOR_HEIGHT),
            OpeningKind::Window => (Opening::WINDOW_WIDTH, Opening::WINDOW_HEIGHT),
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningKind::Door => write!(f, "door"),
            OpeningKind::Window => write!(f, "window"),
        }
    }
}

/// Fixed-size rectangular opening subtracted from a wall's paintable area
///
/// Openings carry no validation of their own; placement rules are enforced
/// by the wall that owns them.
///
/// # Examples
///
/// ```rust
/// use paint_calculator::domain::{Opening, OpeningKind};
///
/// let door = Opening::door();
/// assert_eq!(door.kind(), OpeningKind::Door);
/// assert!((door.area() - 1.52).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    kind: OpeningKind,
    width: f64,
    height: f64,
}

impl Opening {
    /// Standard door width in meters
    pub const DOOR_WIDTH: f64 = 0.8;

    /// Standard door height in meters
    pub const DOOR_HEIGHT: f64 = 1.9;

    /// Standard window width in meters
    pub const WINDOW_WIDTH: f64 = 2.0;

    /// Standard window height in meters
    pub const WINDOW_HEIGHT: f64 = 1.2;

    /// Create the standard opening for a kind
    pub const fn of_kind(kind: OpeningKind) -> Self {
        let (width, height) = kind.dimensions();
        Self {
            kind,
            width,
            height,
        }
    }

    /// Standard 0.8 x 1.9 door
    pub const fn door() -> Self {
        Self::of_kind(OpeningKind::Door)
    }

    /// Standard 2.0 x 1.2 window
    pub const fn window() -> Self {
        Self::of_kind(OpeningKind::Window)
    }

    pub fn kind(&self) -> OpeningKind {
        self.kind
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Area covered by the opening in square meters
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
