//! # luraph
//!
//! Async client library for the [Luraph](https://lura.ph) code-obfuscation
//! API.
//!
//! The crate covers the full job lifecycle as the API exposes it:
//! - **Node discovery** - list processing nodes and their option specs
//! - **Job submission** - upload a script plus an option set
//! - **Status polling** - one poll per call; cadence belongs to you
//! - **Result download** - raw text retrieval with header-derived naming
//!
//! The job lifecycle itself is entirely server-side; this library only
//! observes it. There are no retries, no timeouts beyond the transport
//! defaults, and no state beyond the API key, so a single [`Luraph`]
//! instance can drive any number of concurrent jobs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use luraph::Luraph;
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Luraph::new(std::env::var("LPH_API_KEY")?);
//!
//!     let nodes = api.get_nodes().await?;
//!     let node = nodes.recommended_id.ok_or("no stable node available")?;
//!
//!     let job = api
//!         .create_new_job(&node, "print'Hello World!'", "hello.lua", &HashMap::new(), false, false)
//!         .await?;
//!
//!     let status = api.get_job_status(&job.job_id).await?;
//!     if status.success {
//!         let result = api.download_result(&job.job_id).await?;
//!         println!("{}: {}", result.file_name, result.data);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// API client and transport
pub mod client;
/// Error types
pub mod error;
/// Wire format types
pub mod types;
/// Header parsing utilities
pub mod utils;

// Re-export commonly used types
pub use client::Luraph;
pub use error::{ApiError, Error, LuraphError, Result};
pub use types::{
    LuraphDownloadResponse, LuraphJobStatusResponse, LuraphNewJobResponse, LuraphNode,
    LuraphNodesResponse, LuraphOptionInfo, LuraphOptionList, LuraphOptionTier, LuraphOptionType,
    LuraphOptionValue,
};
