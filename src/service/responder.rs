// Copyright (c) 2025 - Cowboy AI, Inc.
//! NATS Request/Reply Responder
//!
//! Serves a [`PaintBudgetService`] on a NATS subject:
//!
//! ```text
//! request on paint.budget.>
//!     ↓
//! subject known?    no → {"error": "subject '...' does not exist in this API"}
//!     ↓
//! rate limit slot?  no → {"error": "too many requests ..."}
//!     ↓
//! JSON decodes?     no → {"error": "invalid field values ..."}
//!     ↓
//! service.calculate → counts or {"error": "<validation message>"}
//! ```
//!
//! Requests are answered one at a time from a single subscription until the
//! shutdown future resolves.

use futures::StreamExt;
use std::future::Future;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::ResponderConfig;
use crate::errors::InfrastructureResult;
use crate::nats::NatsClient;

use super::assembler::PaintBudgetRequest;
use super::paint_budget::{BudgetReply, PaintBudgetService};
use super::rate_limit::RateLimiter;

/// Reply when a request body cannot be decoded
pub const INVALID_REQUEST_MESSAGE: &str = "invalid field values, check the fields and try again";

/// Reply when the rate limit window is exhausted
pub const RATE_LIMITED_MESSAGE: &str =
    "too many requests in a single time frame, please wait another minute";

/// Answers paint budget requests arriving over NATS
pub struct PaintBudgetResponder<S> {
    service: S,
    subject: String,
    limiter: RateLimiter,
}

impl<S: PaintBudgetService> PaintBudgetResponder<S> {
    /// Create a responder for the subject and rate limit in `config`
    pub fn new(service: S, config: &ResponderConfig) -> Self {
        Self {
            service,
            subject: config.subject.clone(),
            limiter: RateLimiter::new(config.rate_limit_max, config.rate_limit_window),
        }
    }

    /// Subject answered with paint budgets
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Produce the reply for one request
    pub async fn handle(&mut self, subject: &str, payload: &[u8]) -> BudgetReply {
        if subject != self.subject {
            warn!(subject, "Request for unknown subject");
            return BudgetReply::error(format!("subject '{}' does not exist in this API", subject));
        }

        if !self.limiter.try_acquire() {
            warn!(subject, "Rate limit reached");
            return BudgetReply::error(RATE_LIMITED_MESSAGE);
        }
        debug!(remaining = self.limiter.remaining(), "Rate limit slot taken");

        let request: PaintBudgetRequest = match serde_json::from_slice(payload) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Failed to decode paint budget request");
                return BudgetReply::error(INVALID_REQUEST_MESSAGE);
            }
        };

        self.service.calculate(request).await.into()
    }

    /// Subscribe and answer requests until `shutdown` resolves
    pub async fn serve<F>(
        mut self,
        client: &NatsClient,
        subscription: &str,
        shutdown: F,
    ) -> InfrastructureResult<()>
    where
        F: Future<Output = ()>,
    {
        let mut subscriber = client.subscribe(subscription).await?;
        info!(subscription, subject = %self.subject, "Paint budget responder ready");

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Gracefully shutting down paint budget responder");
                    break;
                }
                message = subscriber.next() => {
                    let Some(message) = message else {
                        warn!(subscription, "Subscription closed by server");
                        break;
                    };

                    let request_id = Uuid::now_v7();
                    let span = info_span!("paint_request", %request_id, subject = %message.subject);
                    let reply = self
                        .handle(&message.subject, &message.payload)
                        .instrument(span)
                        .await;

                    let Some(inbox) = message.reply else {
                        debug!(%request_id, "Request without reply subject, dropping answer");
                        continue;
                    };

                    if let Err(e) = client.publish(&inbox, &reply).await {
                        error!(%request_id, error = %e, "Failed to send reply");
                    }
                }
            }
        }

        if let Err(e) = subscriber.unsubscribe().await {
            warn!(error = %e, "Failed to unsubscribe");
        }
        client.flush().await
    }
}
