//! Core data models for the report aggregation engine.
//!
//! This module contains the schedule entities consumed by the aggregator
//! and the ephemeral aggregate rows it works on. All entities are owned by
//! the external persistence layer and are read-only relative to this core.

mod employment;
mod rows;
mod schedule;

pub use employment::Employment;
pub use rows::{AbsenceRow, AssignmentRow};
pub use schedule::{Absence, Assignment, ProjectAssignment};
