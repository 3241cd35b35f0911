//! Compass API client library.
//!
//! A Rust library for the Compass resource-management REST API: typed
//! request construction, per-operation error mapping, and convenience
//! assembly of multi-page and multi-batch results.
//!
//! Every operation is a stateless round trip (or a simple loop of round
//! trips). Authentication tokens, retry policy, and connection management
//! are configuration of the underlying HTTP client; this layer adds no
//! caching and no shared state between calls.
//!
//! # Quick Start
//!
//! ```no_run
//! use compassapi::{ChildrenParams, CompassClient, Decorations, GetResourceParams};
//!
//! #[tokio::main]
//! async fn main() -> compassapi::Result<()> {
//!     // Create client from environment variables
//!     let client = CompassClient::from_env()?;
//!
//!     // Fetch a resource with all decorations filled in
//!     let resource = client
//!         .get_resource(
//!             "ri.compass.main.dataset.1337",
//!             &GetResourceParams {
//!                 decoration: Some(Decorations::All),
//!                 ..Default::default()
//!             },
//!         )
//!         .await?;
//!     println!("Resource: {} ({})", resource.name, resource.rid);
//!
//!     // List every child of a folder, following pagination
//!     let children = client
//!         .list_children("ri.compass.main.folder.af04", &ChildrenParams::default())
//!         .await?;
//!     println!("Found {} children", children.len());
//!
//!     // Resolve paths for many rids in batches
//!     let paths = client.get_paths(&[resource.rid.clone()]).await?;
//!     println!("Path: {:?}", paths.get(&resource.rid));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`CompassClient`] owns transport: authentication, base URL joining,
//!   and response checking against each operation's [`ErrorMap`].
//! - The operation methods (grouped by API area in `ops`) build requests
//!   and reshape responses; see [`CompassClient`] for the full surface.
//! - The type catalog in [`types`] mirrors the JSON wire format: opaque
//!   identifier aliases, enumerated literal vocabularies, and structured
//!   records with optional decorated fields.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `COMPASS_API_TOKEN` (required) - Bearer token
//! - `COMPASS_API_URL` (required) - Base URL, e.g.
//!   `https://stack.example.com/compass/api`

mod client;
mod error;
mod ops;
mod pagination;
pub mod types;

// Re-export core types
pub use client::CompassClient;
pub use error::{CompassError, ErrorKind, ErrorMap, Result};
pub use pagination::{
    clamp_page_size, validate_search_offset, TokenPage, DEFAULT_PROJECTS_PAGE_SIZE,
    MAXIMUM_PROJECTS_PAGE_SIZE, MAXIMUM_PROJECTS_SEARCH_OFFSET, MINIMUM_PROJECTS_PAGE_SIZE,
    MINIMUM_PROJECTS_SEARCH_OFFSET,
};

// Re-export operation parameter types
pub use ops::{
    ChildrenParams, GetResourceParams, ProjectSearchRequest, RoleGrantsUpdate,
    PATHS_BATCH_SIZE, PROJECTS_BATCH_SIZE,
};

// Re-export the most commonly used catalog types at the crate root
pub use types::{
    Decorations, PatchOperation, Project, Resource, ResourceDecoration, ResourceGrantsResult,
    RoleGrant, RoleGrantPatch, SortDirection, SortField, SortSpec,
};
