//! tbscore-audit
//!
//! Structured audit events for finalized assessments, emitted through
//! `tracing` so any subscriber (stdout, JSON logs, a collector) can archive
//! them. The engine itself keeps no history.

pub mod events;
