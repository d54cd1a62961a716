//! Core pipeline orchestration for clipmark.
//!
//! This crate ties extraction, cleaning, and document assembly into the
//! end-to-end `clip_url` workflow.

pub mod assembler;
pub mod pipeline;
