//! JSON file codec
//!
//! Generic save/load of serde values as pretty-printed JSON files. Enum
//! fields round-trip as their symbolic names. The core API reports failures
//! as [`CodecError`]; the `_or_log`/`_or_default` wrappers swallow failures
//! after logging them, for call sites that prefer a fallback value over
//! error plumbing.
//!
//! # Example
//!
//! ```rust,no_run
//! use plinth::codec;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Default, PartialEq, Debug)]
//! struct Settings {
//!     retries: u32,
//! }
//!
//! let settings = Settings { retries: 3 };
//! codec::save_json("settings.json", &settings).unwrap();
//! let loaded: Settings = codec::load_json_or_default("settings.json");
//! assert_eq!(loaded, settings);
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from the JSON file codec
#[derive(Debug, Error)]
pub enum CodecError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding or decoding the JSON text failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file exists but holds no content
    #[error("Json file is empty: '{path}'")]
    EmptyFile { path: String },

    /// The file holds the literal `null` document
    #[error("Json document is null: '{path}'")]
    NullDocument { path: String },
}

/// A specialized Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Serialize `value` to pretty-printed JSON at `path`
///
/// Existing content is overwritten.
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deserialize a value from the JSON file at `path`
///
/// An empty or whitespace-only file and a literal `null` document are
/// reported as structured errors rather than parse failures.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    if json.trim().is_empty() {
        return Err(CodecError::EmptyFile {
            path: path.display().to_string(),
        });
    }
    serde_json::from_str::<Option<T>>(&json)?.ok_or_else(|| CodecError::NullDocument {
        path: path.display().to_string(),
    })
}

/// Like [`save_json`], but reports failure as a flag
///
/// Any error is logged and `false` returned instead of propagating.
pub fn save_json_or_log<T: Serialize>(path: impl AsRef<Path>, value: &T) -> bool {
    let path = path.as_ref();
    match save_json(path, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to serialize to file '{}': {}", path.display(), e);
            false
        }
    }
}

/// Like [`load_json`], but falls back to `T::default()` on any failure
///
/// The failure is only visible in the log: a missing file and a freshly
/// defaulted value are indistinguishable to the caller.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: impl AsRef<Path>) -> T {
    let path = path.as_ref();
    match load_json(path) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(
                "Failed to deserialize from file '{}': {}",
                path.display(),
                e
            );
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    enum Tier {
        #[default]
        Free,
        Pro,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Account {
        name: String,
        tier: Tier,
        quota: u64,
    }

    fn sample() -> Account {
        Account {
            name: "acme".into(),
            tier: Tier::Pro,
            quota: 42,
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");

        save_json(&path, &sample()).unwrap();
        let loaded: Account = load_json(&path).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn writes_pretty_json_with_enum_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");

        save_json(&path, &sample()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"Pro\""), "enum rendered by name: {text}");
        assert!(text.contains('\n'), "output is indented: {text}");
    }

    #[test]
    fn save_overwrites_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("account.json");

        save_json(&path, &sample()).unwrap();
        let replacement = Account::default();
        save_json(&path, &replacement).unwrap();

        let loaded: Account = load_json(&path).unwrap();
        assert_eq!(loaded, replacement);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Account> = load_json(dir.path().join("absent.json"));
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn load_empty_file_is_structured_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "  \n\t ").unwrap();

        let result: Result<Account> = load_json(&path);
        assert!(matches!(result, Err(CodecError::EmptyFile { .. })));
    }

    #[test]
    fn load_null_document_is_structured_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("null.json");
        fs::write(&path, "null").unwrap();

        let result: Result<Account> = load_json(&path);
        assert!(matches!(result, Err(CodecError::NullDocument { .. })));
    }

    #[test]
    fn lenient_load_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();

        let missing: Account = load_json_or_default(dir.path().join("absent.json"));
        assert_eq!(missing, Account::default());

        let path = dir.path().join("empty.json");
        fs::write(&path, "").unwrap();
        let empty: Account = load_json_or_default(&path);
        assert_eq!(empty, Account::default());

        let path = dir.path().join("null.json");
        fs::write(&path, "null").unwrap();
        let null: Account = load_json_or_default(&path);
        assert_eq!(null, Account::default());

        let path = dir.path().join("garbage.json");
        fs::write(&path, "{not json").unwrap();
        let garbage: Account = load_json_or_default(&path);
        assert_eq!(garbage, Account::default());
    }

    #[test]
    fn lenient_save_reports_failure_as_flag() {
        let dir = tempfile::tempdir().unwrap();

        assert!(save_json_or_log(dir.path().join("ok.json"), &sample()));
        // Writing to the directory itself fails with an I/O error.
        assert!(!save_json_or_log(dir.path(), &sample()));
    }
}
