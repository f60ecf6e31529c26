//! Lifecycle extension points
//!
//! The shell owns the feature wiring; applications extend the phases through
//! this strategy trait instead of subclassing. Every method defaults to a
//! no-op so implementors override only what they need.

use crate::app::{ContextBuilder, MountedContext};
use crate::guard::Guard;
use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;

/// Extension points for the application lifecycle
///
/// # Example
///
/// ```rust,ignore
/// use plinth::app::{AppHooks, MountedContext};
/// use axum::{routing::get, Router};
///
/// struct MyHooks;
///
/// #[async_trait::async_trait]
/// impl AppHooks for MyHooks {
///     fn routes(&self) -> Router {
///         Router::new().route("/health", get(|| async { "ok" }))
///     }
///
///     async fn on_install(&self, _ctx: &MountedContext) -> anyhow::Result<()> {
///         tracing::info!("Seeding initial data");
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait AppHooks: Send + Sync {
    /// Application routes, mapped into the context when Controllers is enabled
    fn routes(&self) -> Router {
        Router::new()
    }

    /// Guards attached in front of the routes when Authorization is enabled
    fn guards(&self) -> Vec<Arc<dyn Guard>> {
        Vec::new()
    }

    /// Called during mount, before the context is built
    ///
    /// The builder is mutable: hooks may override the runtime mode or
    /// replace the OpenAPI document here.
    async fn on_build(&self, _builder: &mut ContextBuilder) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called during mount, after the context is built and configured
    async fn on_mounted(&self, _ctx: &MountedContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// One-time setup, e.g. seeding; invoked by install
    async fn on_install(&self, _ctx: &MountedContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called by run just before the server starts listening
    async fn on_run(&self, _ctx: &MountedContext) -> anyhow::Result<()> {
        Ok(())
    }

    /// Called by run after the server has stopped
    async fn on_quit(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// The default hooks object: every phase is a no-op
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

#[async_trait]
impl AppHooks for NoHooks {}
