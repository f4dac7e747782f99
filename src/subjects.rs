// Copyright (c) 2025 - Cowboy AI, Inc.

//! NATS subject hierarchy for the paint calculator
//!
//! # Subject Pattern
//!
//! All requests follow the hierarchical pattern:
//!
//! ```text
//! paint.{resource}.{operation}
//! ```
//!
//! The responder listens on the resource wildcard (`paint.budget.>`) so it
//! can answer requests for operations it does not know with an error instead
//! of letting them time out.
//!
//! # Examples
//!
//! ```rust
//! use paint_calculator::subjects::{Operation, Resource, SubjectBuilder};
//!
//! let subject = SubjectBuilder::new(Resource::Budget)
//!     .operation(Operation::Calculate)
//!     .build();
//! assert_eq!(subject, "paint.budget.calculate");
//!
//! let wildcard = SubjectBuilder::new(Resource::Budget).build_wildcard();
//! assert_eq!(wildcard, "paint.budget.>");
//! ```

use std::fmt;

/// Root namespace for all paint calculator subjects
pub const PAINT_ROOT: &str = "paint";

/// Resources exposed over NATS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Paint budgets for a room
    Budget,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Budget => write!(f, "budget"),
        }
    }
}

/// Operations on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Compute the containers needed for a room
    Calculate,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Calculate => write!(f, "calculate"),
        }
    }
}

/// Builder for paint calculator NATS subjects
#[derive(Debug, Clone)]
pub struct SubjectBuilder {
    resource: Resource,
    operation: Option<Operation>,
}

impl SubjectBuilder {
    /// Create a new subject builder for a resource
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            operation: None,
        }
    }

    /// Set the operation
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Build the subject string
    ///
    /// Without an operation this is the resource wildcard.
    pub fn build(self) -> String {
        match self.operation {
            Some(operation) => format!("{}.{}.{}", PAINT_ROOT, self.resource, operation),
            None => self.build_wildcard(),
        }
    }

    /// Build a wildcard subscription for all operations on this resource
    ///
    /// Returns: `paint.{resource}.>`
    pub fn build_wildcard(self) -> String {
        format!("{}.{}.>", PAINT_ROOT, self.resource)
    }
}

/// Convenience functions for common subject patterns
pub mod subjects {
    use super::*;

    pub fn budget_calculate() -> String {
        SubjectBuilder::new(Resource::Budget)
            .operation(Operation::Calculate)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let subject = SubjectBuilder::new(Resource::Budget)
            .operation(Operation::Calculate)
            .build();

        assert_eq!(subject, "paint.budget.calculate");
    }

    #[test]
    fn test_build_without_operation_is_wildcard() {
        assert_eq!(SubjectBuilder::new(Resource::Budget).build(), "paint.budget.>");
    }

    #[test]
    fn test_convenience_functions() {
        assert_eq!(subjects::budget_calculate(), "paint.budget.calculate");
    }
}
