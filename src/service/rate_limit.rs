// Copyright (c) 2025 - Cowboy AI, Inc.
//! Fixed-window request rate limiter

use std::time::{Duration, Instant};

/// Counts requests in fixed windows and rejects those past the maximum
///
/// A `max` of zero disables limiting.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    max: u32,
    window: Duration,
    window_start: Option<Instant>,
    used: u32,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            window_start: None,
            used: 0,
        }
    }

    /// Take a slot in the current window
    pub fn try_acquire(&mut self) -> bool {
        self.try_acquire_at(Instant::now())
    }

    /// Take a slot as if the current time were `now`
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        if self.max == 0 {
            return true;
        }

        let expired = match self.window_start {
            Some(start) => now.saturating_duration_since(start) >= self.window,
            None => true,
        };
        if expired {
            self.window_start = Some(now);
            self.used = 0;
        }

        if self.used >= self.max {
            return false;
        }
        self.used += 1;
        true
    }

    /// Slots left in the current window
    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_within_window() {
        let start = Instant::now();
        let mut limiter = RateLimiter::new(3, Duration::from_secs(60));

        assert!(limiter.try_acquire_at(start));
        assert!(limiter.try_acquire_at(start + Duration::from_secs(1)));
        assert!(limiter.try_acquire_at(start + Duration::from_secs(2)));
        assert_eq!(limiter.remaining(), 0);
        assert!(!limiter.try_acquire_at(start + Duration::from_secs(59)));
    }

    #[test]
    fn test_window_resets() {
        let start = Instant::now();
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.try_acquire_at(start));
        assert!(!limiter.try_acquire_at(start + Duration::from_secs(30)));
        assert!(limiter.try_acquire_at(start + Duration::from_secs(60)));
        assert!(!limiter.try_acquire_at(start + Duration::from_secs(61)));
    }

    #[test]
    fn test_zero_disables_limit() {
        let start = Instant::now();
        let mut limiter = RateLimiter::new(0, Duration::from_secs(60));
        for _ in 0..1000 {
            assert!(limiter.try_acquire_at(start));
        }
    }
}
