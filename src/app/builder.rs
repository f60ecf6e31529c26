//! Fluent construction of an [`App`]

use crate::app::{App, AppDescriptor, AppError, AppHooks, NoHooks, Result};
use crate::features::Features;
use semver::Version;
use std::sync::Arc;

/// Builder for [`App`]
///
/// Supplies the identity metadata, the enabled features and the lifecycle
/// hooks. Only the name is required.
///
/// # Example
///
/// ```rust,no_run
/// use plinth::app::App;
/// use plinth::features::Feature;
///
/// let app = App::builder()
///     .name("demo")
///     .description("Default app template")
///     .features(Feature::Controllers | Feature::Logging)
///     .build()
///     .expect("valid descriptor");
/// ```
pub struct AppBuilder {
    name: Option<String>,
    version: Version,
    description: String,
    url: Option<String>,
    features: Features,
    hooks: Arc<dyn AppHooks>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            name: None,
            version: Version::new(0, 1, 0),
            description: String::new(),
            url: None,
            features: Features::ALL,
            hooks: Arc::new(NoHooks),
        }
    }

    /// Application name; required, stable for the process lifetime
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Semantic version; defaults to 0.1.0
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Human-readable description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Default bind address used by run when no explicit url is given
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Framework capabilities to enable during mount; defaults to all
    pub fn features(mut self, features: impl Into<Features>) -> Self {
        self.features = features.into();
        self
    }

    /// The lifecycle strategy object; defaults to [`NoHooks`]
    pub fn hooks(mut self, hooks: impl AppHooks + 'static) -> Self {
        self.hooks = Arc::new(hooks);
        self
    }

    /// Validate the descriptor and produce an unmounted [`App`]
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidDescriptor`] when the name is missing or blank.
    pub fn build(self) -> Result<App> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(AppError::invalid_descriptor("application name is required"));
            }
        };

        tracing::info!("Allocating app '{}'", name);

        let descriptor = AppDescriptor::new(
            name,
            self.version,
            self.description,
            self.url,
            self.features,
        );
        Ok(App::new(descriptor, self.hooks))
    }
}
