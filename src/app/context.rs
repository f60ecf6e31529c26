//! The mounted server context and its builder

use crate::config::{ConfigService, RuntimeMode};
use crate::guard::{Guard, GuardLayer};
use crate::redirect::HttpsRedirectLayer;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::openapi::OpenApi;

/// Which registrations ran during mount
///
/// Populated as the two configuration passes execute; used for logging and
/// for asserting the feature wiring in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attachments {
    /// Application routes were mapped (Controllers)
    pub routes: bool,
    /// An OpenAPI document was generated (Swagger)
    pub doc_services: bool,
    /// Doc-UI routes were attached (Controllers + development mode)
    pub doc_ui: bool,
    /// The HTTPS-redirect layer was attached (Https)
    pub https_redirect: bool,
    /// The guard layer was attached (Authorization)
    pub authorization: bool,
    /// The logging subscriber and request tracing were configured (Logging)
    pub logging: bool,
}

/// Pre-build configuration state: the first mount pass runs against this
///
/// Passed mutably to the `on_build` hook before the context is built.
pub struct ContextBuilder {
    args: Vec<String>,
    config: ConfigService,
    mode: RuntimeMode,
    openapi: Option<OpenApi>,
    pub(crate) attachments: Attachments,
}

impl ContextBuilder {
    pub(crate) fn new(args: Vec<String>) -> Self {
        let config = ConfigService::new();
        let mode = config.runtime_mode();
        Self {
            args,
            config,
            mode,
            openapi: None,
            attachments: Attachments::default(),
        }
    }

    /// Process arguments, verbatim as passed to mount
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn config(&self) -> &ConfigService {
        &self.config
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Override the runtime mode resolved from the environment
    pub fn set_mode(&mut self, mode: RuntimeMode) {
        self.mode = mode;
    }

    pub fn openapi(&self) -> Option<&OpenApi> {
        self.openapi.as_ref()
    }

    /// Replace the OpenAPI document registered by the build pass
    pub fn set_openapi(&mut self, openapi: OpenApi) {
        self.openapi = Some(openapi);
    }

    pub(crate) fn build(self) -> MountedContext {
        MountedContext {
            args: self.args,
            config: self.config,
            mode: self.mode,
            router: Router::new(),
            openapi: self.openapi,
            attachments: self.attachments,
        }
    }
}

/// The mounted server context
///
/// The configured router plus the resolved runtime state. Created exactly
/// once during mount; reclaimed when the process exits.
pub struct MountedContext {
    args: Vec<String>,
    config: ConfigService,
    mode: RuntimeMode,
    router: Router,
    openapi: Option<OpenApi>,
    attachments: Attachments,
}

impl MountedContext {
    /// Process arguments, verbatim as passed to mount
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn config(&self) -> &ConfigService {
        &self.config
    }

    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    pub fn openapi(&self) -> Option<&OpenApi> {
        self.openapi.as_ref()
    }

    /// What the mount passes attached
    pub fn attachments(&self) -> Attachments {
        self.attachments
    }

    /// Clone of the configured router, e.g. for probing in tests
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub(crate) fn into_router(self) -> Router {
        self.router
    }

    /// Map the application routes into the context
    pub(crate) fn map_routes(&mut self, routes: Router) {
        self.router = std::mem::take(&mut self.router).merge(routes);
        self.attachments.routes = true;
    }

    /// Attach the doc-UI routes outside the redirect and guard layers
    pub(crate) fn mount_docs(&mut self, docs: Router) {
        self.router = std::mem::take(&mut self.router).merge(docs);
        self.attachments.doc_ui = true;
    }

    /// Wrap the routes mounted so far with the guard layer
    pub(crate) fn use_authorization(&mut self, guards: Vec<Arc<dyn Guard>>) {
        self.router = std::mem::take(&mut self.router).layer(GuardLayer::new(guards));
        self.attachments.authorization = true;
    }

    /// Wrap the routes mounted so far with the HTTPS-redirect layer
    pub(crate) fn use_https_redirect(&mut self) {
        self.router = std::mem::take(&mut self.router).layer(HttpsRedirectLayer);
        self.attachments.https_redirect = true;
    }

    /// Trace every request; attached outermost
    pub(crate) fn use_request_tracing(&mut self) {
        self.router = std::mem::take(&mut self.router).layer(TraceLayer::new_for_http());
    }
}
