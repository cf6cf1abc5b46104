//! Startup-time composition of endpoint and endpoint-group descriptors.
//!
//! Applications describe each route as an [`Endpoint`] and each set of
//! routes sharing a prefix or configuration as an [`EndpointGroup`], list
//! them in an [`EndpointRegistry`] and compose them onto a router once at
//! startup:
//!
//! ```ignore
//! use endpoint_groups::{EndpointRegistry, MapEndpoints, RouteGroup};
//!
//! let registry = EndpointRegistry::new()
//!     .group(UsersGroup)
//!     .endpoint(ListUsers)
//!     .endpoint(Health);
//!
//! let app: axum::Router = RouteGroup::new()
//!     .map_all_endpoints(&registry)?
//!     .into_router();
//! ```
//!
//! Composition validates the descriptors (unique group names, no dangling
//! group references), maps groups in name order and maps ungrouped
//! endpoints at the root last.

pub mod adapters;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod groups;
pub mod logging;
pub mod registry;
pub mod router;

pub use adapters::http::{RouteGroup, RouteHandler};
pub use config::{Config, ConfigError};
pub use endpoints::Endpoint;
pub use error::{ComposeError, Result};
pub use groups::{EndpointGroup, DEFAULT_ROUTE_PREFIX};
pub use registry::EndpointRegistry;
pub use router::{compose, validate, Composer, MapEndpoints, RouteBuilder};
