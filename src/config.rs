// Copyright (c) 2025 - Cowboy AI, Inc.
//! Responder configuration
//!
//! Loaded from environment variables with defaults for every value:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NATS_URL` | `nats://localhost:4222` (comma separated list) |
//! | `NATS_CLIENT_NAME` | `paint-calculator` |
//! | `PAINT_SUBJECT` | `paint.budget.calculate` |
//! | `PAINT_RATE_LIMIT_MAX` | `100` |
//! | `PAINT_RATE_LIMIT_WINDOW_SECS` | `60` |

use std::time::Duration;

use crate::errors::{InfrastructureError, InfrastructureResult};
use crate::nats::NatsConfig;
use crate::subjects::subjects;

/// Configuration for the paint budget responder
#[derive(Debug, Clone, PartialEq)]
pub struct ResponderConfig {
    /// NATS connection settings
    pub nats: NatsConfig,
    /// Subject answered with paint budgets
    pub subject: String,
    /// Requests accepted per window
    pub rate_limit_max: u32,
    /// Length of a rate limit window
    pub rate_limit_window: Duration,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            nats: NatsConfig::default(),
            subject: subjects::budget_calculate(),
            rate_limit_max: 100,
            rate_limit_window: Duration::from_secs(60),
        }
    }
}

impl ResponderConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> InfrastructureResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> InfrastructureResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(urls) = lookup("NATS_URL") {
            let servers: Vec<String> = urls
                .split(',')
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect();
            if servers.is_empty() {
                return Err(InfrastructureError::Configuration(
                    "NATS_URL does not contain any server".to_string(),
                ));
            }
            config.nats.servers = servers;
        }

        if let Some(name) = lookup("NATS_CLIENT_NAME") {
            config.nats.name = name;
        }

        if let Some(subject) = lookup("PAINT_SUBJECT") {
            config.subject = subject;
        }

        if let Some(max) = lookup("PAINT_RATE_LIMIT_MAX") {
            config.rate_limit_max = parse_number("PAINT_RATE_LIMIT_MAX", &max)?;
        }

        if let Some(secs) = lookup("PAINT_RATE_LIMIT_WINDOW_SECS") {
            let secs: u64 = parse_number("PAINT_RATE_LIMIT_WINDOW_SECS", &secs)?;
            config.rate_limit_window = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Subject the responder subscribes to: every sibling of the configured
    /// subject, so unknown operations can be answered
    pub fn subscription(&self) -> String {
        match self.subject.rsplit_once('.') {
            Some((parent, _)) => format!("{}.>", parent),
            None => self.subject.clone(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> InfrastructureResult<T> {
    value.trim().parse().map_err(|_| {
        InfrastructureError::Configuration(format!("{} must be a number, got '{}'", key, value))
    })
}
