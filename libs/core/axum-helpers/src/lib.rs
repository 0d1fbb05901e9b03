//! # Axum Helpers
//!
//! Shared plumbing for the Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the `{status, message, data}` JSON wrapper used by every response
//! - **[`errors`]**: [`AppError`] and the 404 fallback handler
//! - **[`extractors`]**: JSON body extractor that answers in the envelope format
//! - **[`server`]**: router assembly, server startup, health route, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let routes = Router::new(); // Add your routes
//!     let app = create_router(routes);
//!     create_app(app, &ServerConfig::default()).await
//! }
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod server;

pub use envelope::Envelope;
pub use errors::{AppError, messages};
pub use extractors::EnvelopeJson;
pub use server::{HealthResponse, create_app, create_router, health_router, shutdown_signal};
