//! Object storage gateway for the ViddyScribe backend.
//!
//! This crate provides:
//! - File upload with a post-upload existence check
//! - Single and batched downloads (percent-decoded blob names)
//! - Presigned read-only URL generation
//! - Direct byte downloads for streaming responses
//!
//! The bucket is driven through its S3-compatible XML API using HMAC
//! interop keys, with a fallback to the ambient credential chain.

pub mod client;
pub mod error;

pub use client::{BucketClient, BucketConfig, HmacCredentials};
pub use error::{StorageError, StorageResult};
