//! hoi - Human-object interaction datasets and action co-occurrence analysis
//!
//! This library loads annotated interaction datasets (entities with bounding
//! boxes, and actions linking them by verb) and computes descriptive
//! statistics about how actions share subjects and targets.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod datasets;
pub mod json_output;
pub mod structs;
