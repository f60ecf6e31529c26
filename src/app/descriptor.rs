//! Application identity

use crate::features::Features;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Application identity metadata
///
/// Built once per process by [`AppBuilder`](crate::app::AppBuilder) and
/// immutable afterwards. The `id` is generated at construction and unique
/// per instance.
///
/// Equality is defined over the identity fields (name, version, description,
/// url, features); the per-instance id never participates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Application name, stable for the process lifetime
    pub name: String,
    /// Semantic version
    pub version: Version,
    /// Human-readable description
    pub description: String,
    /// Default bind address, e.g. `127.0.0.1:8080`
    pub url: Option<String>,
    /// Framework capabilities enabled during mount
    pub features: Features,
    id: Uuid,
}

impl AppDescriptor {
    pub(crate) fn new(
        name: String,
        version: Version,
        description: String,
        url: Option<String>,
        features: Features,
    ) -> Self {
        Self {
            name,
            version,
            description,
            url,
            features,
            id: Uuid::new_v4(),
        }
    }

    /// Unique per-instance identifier, assigned at construction
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for AppDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for AppDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.version == other.version
            && self.description == other.description
            && self.url == other.url
            && self.features == other.features
    }
}

impl Eq for AppDescriptor {}
