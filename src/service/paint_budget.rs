// Copyright (c) 2025 - Cowboy AI, Inc.
//! Paint Budget Service
//!
//! Application service running one request end to end:
//!
//! ```text
//! PaintBudgetRequest → assemble_room → PaintBudgetCalculator → ContainerCounts
//! ```
//!
//! Each call builds its own room and discards it afterwards; no state is
//! shared between requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::domain::{ContainerCounts, PaintBudgetCalculator, ValidationError};
use crate::errors::{InfrastructureError, InfrastructureResult};

use super::assembler::{assemble_room, PaintBudgetRequest};

/// Container counts returned for a request
pub type PaintBudgetResponse = ContainerCounts;

/// Service layer result type
pub type ServiceResult<T> = Result<T, ValidationError>;

/// Paint budget service trait
#[async_trait]
pub trait PaintBudgetService: Send + Sync {
    /// Compute the containers needed to paint the requested room
    ///
    /// # Returns
    /// - Count per container size, or the first validation error
    async fn calculate(&self, request: PaintBudgetRequest) -> ServiceResult<PaintBudgetResponse>;
}

/// Run a request through assembly and calculation synchronously
pub fn calculate_budget(request: &PaintBudgetRequest) -> ServiceResult<PaintBudgetResponse> {
    let room = assemble_room(&request.walls)?;
    let containers = PaintBudgetCalculator::new().calculate(&room);
    Ok(ContainerCounts::from_containers(&containers))
}

/// In-process implementation of [`PaintBudgetService`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPaintBudgetService;

impl LocalPaintBudgetService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaintBudgetService for LocalPaintBudgetService {
    async fn calculate(&self, request: PaintBudgetRequest) -> ServiceResult<PaintBudgetResponse> {
        match calculate_budget(&request) {
            Ok(budget) => {
                info!(
                    walls = request.walls.len(),
                    huge_can = budget.extra_large,
                    big_can = budget.large,
                    medium_can = budget.medium,
                    small_can = budget.small,
                    "Calculated paint budget"
                );
                Ok(budget)
            }
            Err(e) => {
                warn!(walls = request.walls.len(), error = %e, "Rejected paint budget request");
                Err(e)
            }
        }
    }
}

/// Reply body sent back to a requester
///
/// Encoded either as the bare container counts or as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetReply {
    /// Successful calculation
    Budget(PaintBudgetResponse),
    /// Human readable failure
    Error { error: String },
}

impl BudgetReply {
    pub fn error(message: impl Into<String>) -> Self {
        BudgetReply::Error {
            error: message.into(),
        }
    }

    /// Convert into a result, mapping error replies to [`InfrastructureError::Rejected`]
    pub fn into_result(self) -> InfrastructureResult<PaintBudgetResponse> {
        match self {
            BudgetReply::Budget(budget) => Ok(budget),
            BudgetReply::Error { error } => Err(InfrastructureError::Rejected(error)),
        }
    }
}

impl From<ServiceResult<PaintBudgetResponse>> for BudgetReply {
    fn from(result: ServiceResult<PaintBudgetResponse>) -> Self {
        match result {
            Ok(budget) => BudgetReply::Budget(budget),
            Err(e) => BudgetReply::error(e.to_string()),
        }
    }
}
