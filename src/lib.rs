//! Composite quality-of-life scoring for Madrid's 21 districts.
//!
//! The pipeline is: long-form indicator records (one observation per district
//! and indicator) are cleaned, pivoted into a per-district table, and scored
//! per life domain (economy, education, social services, health, culture)
//! with min-max normalization and a fixed AHP-derived weight set. Scores are
//! on a 0-100 scale, two decimals, one row per district.

pub mod ahp;
pub mod config;
pub mod districts;
pub mod output;
pub mod prepare;
pub mod scoring;
pub mod table;
