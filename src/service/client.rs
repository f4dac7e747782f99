// Copyright (c) 2025 - Cowboy AI, Inc.
//! Typed requester for a remote paint budget responder

use tracing::debug;

use crate::errors::InfrastructureResult;
use crate::nats::NatsClient;
use crate::subjects::subjects;

use super::assembler::PaintBudgetRequest;
use super::paint_budget::{BudgetReply, PaintBudgetResponse};

/// Sends paint budget requests over NATS request/reply
#[derive(Clone)]
pub struct PaintBudgetClient {
    client: NatsClient,
    subject: String,
}

impl PaintBudgetClient {
    /// Client for the default `paint.budget.calculate` subject
    pub fn new(client: NatsClient) -> Self {
        Self::with_subject(client, subjects::budget_calculate())
    }

    pub fn with_subject(client: NatsClient, subject: impl Into<String>) -> Self {
        Self {
            client,
            subject: subject.into(),
        }
    }

    /// Request a budget; error replies surface as
    /// [`InfrastructureError::Rejected`](crate::errors::InfrastructureError::Rejected)
    pub async fn calculate(
        &self,
        request: &PaintBudgetRequest,
    ) -> InfrastructureResult<PaintBudgetResponse> {
        debug!(subject = %self.subject, walls = request.walls.len(), "Requesting paint budget");
        let reply: BudgetReply = self.client.request(&self.subject, request).await?;
        reply.into_result()
    }
}
