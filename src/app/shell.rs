//! The application lifecycle shell

use crate::app::{
    AppBuilder, AppDescriptor, AppError, AppHooks, ContextBuilder, MountedContext, Result,
    shutdown_signal,
};
use crate::features::Feature;
use crate::{docs, logging};
use std::sync::Arc;

/// An application driven through the mount → install → run lifecycle
///
/// The shell holds the identity descriptor, the hooks strategy object and,
/// once mount completes, the configured server context. Feature wiring is
/// the shell's job: each enabled [`Feature`] maps to a fixed set of
/// registrations against the builder and the built context.
///
/// # Example
///
/// ```rust,no_run
/// use plinth::app::App;
///
/// #[tokio::main]
/// async fn main() -> plinth::Result<()> {
///     let app = App::builder()
///         .name("demo")
///         .description("Default app template")
///         .build()?
///         .initialize(std::env::args())
///         .await?;
///
///     app.run(None).await?;
///     Ok(())
/// }
/// ```
pub struct App {
    descriptor: AppDescriptor,
    hooks: Arc<dyn AppHooks>,
    context: Option<MountedContext>,
}

impl App {
    /// Create a new application builder
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub(crate) fn new(descriptor: AppDescriptor, hooks: Arc<dyn AppHooks>) -> Self {
        Self {
            descriptor,
            hooks,
            context: None,
        }
    }

    /// The application's identity metadata
    pub fn descriptor(&self) -> &AppDescriptor {
        &self.descriptor
    }

    /// Whether mount has completed
    pub fn is_mounted(&self) -> bool {
        self.context.is_some()
    }

    /// The mounted context
    ///
    /// # Errors
    ///
    /// [`AppError::NotMounted`] before [`mount`](Self::mount) has completed.
    pub fn context(&self) -> Result<&MountedContext> {
        self.context
            .as_ref()
            .ok_or_else(|| AppError::not_mounted(&self.descriptor.name))
    }

    /// Mount the application: build and configure the server context
    ///
    /// The build pass registers feature services against the
    /// [`ContextBuilder`]; after the context is built, the mounted pass
    /// attaches middleware and routes to it. Each registration is gated by
    /// its feature bit; the doc UI additionally requires development mode.
    ///
    /// `args` are stashed on the context verbatim; this layer does not
    /// interpret them.
    ///
    /// # Errors
    ///
    /// [`AppError::AlreadyMounted`] on a second call; [`AppError::Hook`]
    /// when a hook fails, in which case no context is stored.
    pub async fn mount(&mut self, args: impl IntoIterator<Item = String>) -> Result<()> {
        if self.context.is_some() {
            return Err(AppError::already_mounted(&self.descriptor.name));
        }

        tracing::info!(
            "Mounting app '{}' {} v{}...",
            self.descriptor.name,
            self.descriptor.id(),
            self.descriptor.version
        );

        let features = self.descriptor.features;
        let mut builder = ContextBuilder::new(args.into_iter().collect());

        tracing::debug!("Building app context with features {}", features);

        // Build pass: feature services against the builder.
        let routes = features
            .contains(Feature::Controllers)
            .then(|| self.hooks.routes());
        if features.contains(Feature::Swagger) {
            builder.set_openapi(docs::build_openapi(&self.descriptor));
            builder.attachments.doc_services = true;
        }
        if features.contains(Feature::Logging) {
            logging::init();
            builder.attachments.logging = true;
        }

        self.hooks
            .on_build(&mut builder)
            .await
            .map_err(|e| AppError::hook("build", e))?;

        let mut ctx = builder.build();

        // Mounted pass. Layers wrap whatever is already mounted, so the
        // order mirrors the request flow: routes innermost, tracing
        // outermost; doc routes sit outside the redirect and guard layers.
        if let Some(routes) = routes {
            ctx.map_routes(routes);
        }
        if features.contains(Feature::Authorization) {
            ctx.use_authorization(self.hooks.guards());
        }
        if features.contains(Feature::Https) {
            ctx.use_https_redirect();
        }
        if features.contains(Feature::Controllers) && ctx.mode().is_development() {
            let docs = docs::docs_router(ctx.openapi().cloned());
            ctx.mount_docs(docs);
        }
        if features.contains(Feature::Logging) {
            ctx.use_request_tracing();
        }

        self.hooks
            .on_mounted(&ctx)
            .await
            .map_err(|e| AppError::hook("mounted", e))?;

        self.context = Some(ctx);
        Ok(())
    }

    /// One-time setup; the install hook runs with the mounted context
    ///
    /// # Errors
    ///
    /// [`AppError::NotMounted`] before mount has completed.
    pub async fn install(&self) -> Result<()> {
        let ctx = self.context()?;
        self.hooks
            .on_install(ctx)
            .await
            .map_err(|e| AppError::hook("install", e))
    }

    /// Mount with `args`, then install
    ///
    /// Convenience for the canonical entry-point flow; returns the shell
    /// ready for [`run`](Self::run).
    pub async fn initialize(mut self, args: impl IntoIterator<Item = String>) -> Result<Self> {
        self.mount(args).await?;
        self.install().await?;
        Ok(self)
    }

    /// Serve until a shutdown signal arrives, then fire the quit hook
    ///
    /// Blocks the calling task. The bind address resolves in order: the
    /// `url` argument, the descriptor url, the `HOST`/`PORT` environment,
    /// then `127.0.0.1:3000`.
    ///
    /// # Errors
    ///
    /// [`AppError::NotMounted`] before mount has completed;
    /// [`AppError::Bind`] / [`AppError::Serve`] on listener failures.
    pub async fn run(mut self, url: Option<&str>) -> Result<()> {
        let ctx = self
            .context
            .take()
            .ok_or_else(|| AppError::not_mounted(&self.descriptor.name))?;

        let addr = url
            .map(str::to_owned)
            .or_else(|| self.descriptor.url.clone())
            .unwrap_or_else(|| ctx.config().server_addr());

        tracing::info!("Running app '{}' on '{}'", self.descriptor.name, addr);

        self.hooks
            .on_run(&ctx)
            .await
            .map_err(|e| AppError::hook("run", e))?;

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| AppError::Bind {
                addr: addr.clone(),
                source,
            })?;

        axum::serve(listener, ctx.into_router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(AppError::Serve)?;

        self.hooks
            .on_quit()
            .await
            .map_err(|e| AppError::hook("quit", e))
    }
}
