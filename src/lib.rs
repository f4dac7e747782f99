//! Paint budget calculator
//!
//! Computes how many paint containers (18, 3.6, 2.5 and 0.5 liters) are
//! needed for a room of up to four walls with standard doors and windows,
//! and serves the calculation over NATS request/reply.

pub mod config;
pub mod domain;
pub mod errors;
pub mod nats;
pub mod service;
pub mod subjects;

// Re-export commonly used types
pub use config::ResponderConfig;
pub use domain::{
    ContainerCounts, ContainerSize, Opening, OpeningKind, PaintBudgetCalculator, Room,
    ValidationError, Wall,
};
pub use errors::{InfrastructureError, InfrastructureResult};
pub use nats::{NatsClient, NatsConfig};
pub use service::{
    calculate_budget, LocalPaintBudgetService, PaintBudgetRequest, PaintBudgetResponder,
    PaintBudgetResponse, PaintBudgetService, WallSpec,
};
