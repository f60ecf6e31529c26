//! Framework feature toggles
//!
//! The bootstrap shell enables a fixed set of framework capabilities during
//! mount. The public API works with named features composed via `|`; the
//! numeric bit values are stable and exist only for serialization
//! compatibility with configuration written by other tools.
//!
//! # Example
//!
//! ```
//! use plinth::features::{Feature, Features};
//!
//! let features = Feature::Controllers | Feature::Logging;
//! assert!(features.contains(Feature::Controllers));
//! assert!(!features.contains(Feature::Https));
//! assert_eq!(Features::ALL.bits(), 0b11111);
//! ```

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A single togglable framework capability
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
pub enum Feature {
    /// Application routing: hook-provided routes are mapped during mount
    Controllers,
    /// OpenAPI document generation
    Swagger,
    /// Authorization guards in front of the mapped routes
    Authorization,
    /// Redirection of plain-HTTP requests to HTTPS
    Https,
    /// Logging subscriber and request tracing
    Logging,
}

impl Feature {
    /// Stable bit value, for serialization compatibility only
    pub const fn bit(self) -> u32 {
        match self {
            Feature::Controllers => 1 << 0,
            Feature::Swagger => 1 << 1,
            Feature::Authorization => 1 << 2,
            Feature::Https => 1 << 3,
            Feature::Logging => 1 << 4,
        }
    }
}

/// A set of [`Feature`]s
///
/// Serializes as a sequence of symbolic feature names rather than the packed
/// integer, matching the codec's enum-as-name convention.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Features(u32);

impl Features {
    /// The empty set
    pub const NONE: Features = Features(0);

    /// Every capability enabled; the default for new applications
    pub const ALL: Features = Features(
        Feature::Controllers.bit()
            | Feature::Swagger.bit()
            | Feature::Authorization.bit()
            | Feature::Https.bit()
            | Feature::Logging.bit(),
    );

    /// Whether `feature` is enabled in this set
    pub const fn contains(self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The packed bit representation
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Build a set from packed bits; unknown bits are discarded
    pub const fn from_bits(bits: u32) -> Features {
        Features(bits & Features::ALL.0)
    }

    /// Iterate over the enabled features
    pub fn iter(self) -> impl Iterator<Item = Feature> {
        Feature::iter().filter(move |f| self.contains(*f))
    }
}

impl From<Feature> for Features {
    fn from(feature: Feature) -> Self {
        Features(feature.bit())
    }
}

impl FromIterator<Feature> for Features {
    fn from_iter<I: IntoIterator<Item = Feature>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Features::NONE, |set, feature| set | feature)
    }
}

impl BitOr for Features {
    type Output = Features;

    fn bitor(self, rhs: Features) -> Features {
        Features(self.0 | rhs.0)
    }
}

impl BitOr<Feature> for Features {
    type Output = Features;

    fn bitor(self, rhs: Feature) -> Features {
        Features(self.0 | rhs.bit())
    }
}

impl BitOr for Feature {
    type Output = Features;

    fn bitor(self, rhs: Feature) -> Features {
        Features(self.bit() | rhs.bit())
    }
}

impl BitOrAssign<Feature> for Features {
    fn bitor_assign(&mut self, rhs: Feature) {
        self.0 |= rhs.bit();
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let names: Vec<String> = self.iter().map(|feature| feature.to_string()).collect();
        f.write_str(&names.join("|"))
    }
}

impl fmt::Debug for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Features({self})")
    }
}

impl Serialize for Features {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Features {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<Feature>::deserialize(deserializer)?;
        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_values_are_stable() {
        assert_eq!(Feature::Controllers.bit(), 1);
        assert_eq!(Feature::Swagger.bit(), 2);
        assert_eq!(Feature::Authorization.bit(), 4);
        assert_eq!(Feature::Https.bit(), 8);
        assert_eq!(Feature::Logging.bit(), 16);
        assert_eq!(Features::ALL.bits(), 31);
    }

    #[test]
    fn composition_and_membership() {
        let features = Feature::Controllers | Feature::Https;
        assert!(features.contains(Feature::Controllers));
        assert!(features.contains(Feature::Https));
        assert!(!features.contains(Feature::Swagger));
        assert!(!features.contains(Feature::Authorization));
        assert!(!features.contains(Feature::Logging));

        let mut features = Features::NONE;
        features |= Feature::Logging;
        assert!(features.contains(Feature::Logging));
        assert!(Features::NONE.is_empty());
        assert!(!Features::ALL.is_empty());
    }

    #[test]
    fn from_bits_discards_unknown_bits() {
        let features = Features::from_bits(0b1110_0101);
        assert_eq!(features.bits(), 0b0000_0101);
        assert!(features.contains(Feature::Controllers));
        assert!(features.contains(Feature::Authorization));
    }

    #[test]
    fn serializes_as_symbolic_names() {
        let features = Feature::Controllers | Feature::Logging;
        let json = serde_json::to_string(&features).unwrap();
        assert_eq!(json, r#"["Controllers","Logging"]"#);

        let parsed: Features = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, features);

        let empty: Features = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn displays_enabled_names() {
        assert_eq!(Features::NONE.to_string(), "None");
        assert_eq!(
            (Feature::Swagger | Feature::Https).to_string(),
            "Swagger|Https"
        );
    }
}
