//! Shared domain types for the ViddyScribe backend.
//!
//! This crate provides:
//! - Job status tracking types
//! - Output video name derivation
//! - Upload filename sanitization

pub mod naming;
pub mod status;

pub use naming::{blob_name_from_url, output_video_name, sanitize_filename};
pub use status::JobStatus;
