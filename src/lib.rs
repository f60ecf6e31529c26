//! # Plinth
//!
//! A minimal application bootstrap layer for axum services.
//!
//! Plinth wraps the repetitive part of standing up a web service: build a
//! server context, toggle the framework features you want (routing, API
//! docs, authorization guards, HTTPS redirection, logging), and drive the
//! process through an explicit mount → install → run lifecycle. Application
//! logic plugs in through a hooks object instead of subclassing.
//!
//! ## Features
//!
//! - **Feature toggles**: named capabilities with stable bit values,
//!   composed via `|`
//! - **Explicit lifecycle**: mount builds and configures the context,
//!   install runs one-time setup, run serves until a shutdown signal
//! - **Hook-based extension**: contribute routes, guards and phase callbacks
//!   through the [`AppHooks`] strategy object
//! - **JSON file codec**: pretty-printed save/load of serde values with
//!   structured errors and lenient fallback wrappers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use plinth::prelude::*;
//!
//! struct DemoHooks;
//!
//! #[async_trait]
//! impl AppHooks for DemoHooks {
//!     fn routes(&self) -> Router {
//!         Router::new().route("/", get(|| async { "hello" }))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> plinth::Result<()> {
//!     let app = App::builder()
//!         .name("demo")
//!         .description("Default app template")
//!         .hooks(DemoHooks)
//!         .build()?
//!         .initialize(std::env::args())
//!         .await?;
//!
//!     app.run(None).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod codec;
pub mod config;
pub mod docs;
pub mod features;
pub mod guard;
pub mod logging;
pub mod redirect;

mod error;

// Re-export core types
pub use app::{App, AppBuilder, AppDescriptor, AppError, AppHooks, MountedContext, NoHooks};
pub use error::{Error, Result};
pub use features::{Feature, Features};

// Re-export commonly used types from dependencies
pub use anyhow;
pub use async_trait::async_trait;
pub use axum;
pub use semver;

/// Prelude module for convenient imports
///
/// ```
/// use plinth::prelude::*;
/// ```
pub mod prelude {
    pub use crate::app::{
        App, AppBuilder, AppDescriptor, AppError, AppHooks, Attachments, ContextBuilder,
        MountedContext, NoHooks, shutdown_signal,
    };
    pub use crate::codec::{
        CodecError, load_json, load_json_or_default, save_json, save_json_or_log,
    };
    pub use crate::config::{ConfigService, RuntimeMode};
    pub use crate::error::{Error, Result};
    pub use crate::features::{Feature, Features};
    pub use crate::guard::{Guard, GuardError, GuardLayer, GuardResult};
    pub use crate::redirect::HttpsRedirectLayer;
    pub use async_trait::async_trait;
    pub use axum::{
        Json, Router,
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::get,
    };
    pub use semver::Version;
    pub use std::sync::Arc;
}
