//! Request handlers.

pub mod download;
pub mod health;
pub mod samples;
pub mod status;
pub mod upload;

pub use download::*;
pub use health::*;
pub use samples::*;
pub use status::*;
pub use upload::*;
