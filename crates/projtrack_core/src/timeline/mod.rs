//! Timeline (Gantt) layout entry points.
//!
//! # Responsibility
//! - Turn a project's ordered task list into display-ready bar records.
//! - Keep all date recovery behavior inside the engine.

pub mod layout;
