// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Wall geometry rules and container allocation bounds.

mod budget_properties;
mod wall_properties;
