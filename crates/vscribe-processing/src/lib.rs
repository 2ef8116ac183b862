//! HTTP client for the external video processing service.
//!
//! The service is an opaque black box: it receives a stored video
//! reference plus an optional background-music flag and asynchronously
//! produces either an error or an output reference. This crate only
//! shuttles the request across and validates the returned descriptor.

pub mod client;
pub mod error;
pub mod types;

pub use client::{ProcessorClient, ProcessorConfig};
pub use error::{ProcessingError, ProcessingResult};
pub use types::{ProcessDescriptor, ProcessRequest, ProcessedVideo};
