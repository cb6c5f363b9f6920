//! Population aggregation and qualitative banding.
//!
//! This module rolls per-respondent results up into population means and
//! standard deviations, assigns qualitative categories, tallies the
//! category distribution, and drives the end-to-end scoring pipeline.

pub mod aggregate;
pub mod analyzer;
pub mod category;
pub mod types;
pub mod utility;
