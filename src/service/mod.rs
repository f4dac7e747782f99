// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Paint Budgets
//!
//! This module provides the application service layer that orchestrates
//! domain logic and the NATS transport.
//!
//! # Architecture
//!
//! ```text
//! Client Request (NATS request/reply)
//!     ↓
//! Responder (rate limit, decode, reply encoding)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! Request Assembler → Room → PaintBudgetCalculator
//!     ↓
//! Container counts
//! ```
//!
//! # Example
//!
//! ```rust
//! use paint_calculator::service::{calculate_budget, PaintBudgetRequest, WallSpec};
//!
//! let request = PaintBudgetRequest::new(vec![
//!     WallSpec::new(5.0, 5.0).with_doors(1).with_windows(1),
//! ]);
//! let budget = calculate_budget(&request).unwrap();
//! assert_eq!((budget.large, budget.small), (1, 2));
//! ```

pub mod assembler;
pub mod client;
pub mod paint_budget;
pub mod rate_limit;
pub mod responder;

pub use assembler::{assemble_room, PaintBudgetRequest, WallSpec};
pub use client::PaintBudgetClient;
pub use paint_budget::{
    calculate_budget, BudgetReply, LocalPaintBudgetService, PaintBudgetResponse,
    PaintBudgetService, ServiceResult,
};
pub use rate_limit::RateLimiter;
pub use responder::{PaintBudgetResponder, INVALID_REQUEST_MESSAGE, RATE_LIMITED_MESSAGE};
