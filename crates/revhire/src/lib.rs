//! RevHire: a minimal job-board backend.
//!
//! Job seekers register, search the catalog, and apply to postings; employers
//! register, post jobs, and record triage decisions. The [`board`] module holds
//! the whole domain; [`config`], [`telemetry`], and [`error`] carry the process
//! plumbing the HTTP service builds on.

pub mod board;
pub mod config;
pub mod error;
pub mod telemetry;
