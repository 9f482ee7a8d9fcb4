//! tbscore-core
//!
//! Pure output vocabulary of the pediatric TB scoring engine: recorded
//! answers, risk tiers, threshold policies, and the finalized score result.
//! No catalog data lives here.

pub mod error;
pub mod models;
