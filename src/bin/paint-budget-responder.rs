// Copyright (c) 2025 - Cowboy AI, Inc.
//! Paint Budget Responder Service
//!
//! Answers paint budget requests over NATS request/reply until interrupted.
//!
//! Run with: cargo run --bin paint-budget-responder
//!
//! Prerequisites:
//! 1. NATS server running (default: localhost:4222, override with NATS_URL)
//!
//! Try it with the NATS CLI:
//!
//! ```text
//! nats request paint.budget.calculate \
//!   '{"walls":[{"width":5,"height":5,"door_quantity":1,"window_quantity":1}]}'
//! ```

use anyhow::{Context, Result};
use paint_calculator::{
    LocalPaintBudgetService, NatsClient, PaintBudgetResponder, ResponderConfig,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting paint budget responder");

    let config = ResponderConfig::from_env().context("Failed to load configuration")?;
    info!(
        servers = ?config.nats.servers,
        subject = %config.subject,
        rate_limit_max = config.rate_limit_max,
        rate_limit_window_secs = config.rate_limit_window.as_secs(),
        "Configuration loaded"
    );

    let client = NatsClient::new(config.nats.clone())
        .await
        .context("Failed to connect to NATS")?;

    let responder = PaintBudgetResponder::new(LocalPaintBudgetService::new(), &config);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    responder
        .serve(&client, &config.subscription(), shutdown)
        .await
        .context("Responder stopped with an error")?;

    info!("Paint budget responder stopped");
    Ok(())
}
