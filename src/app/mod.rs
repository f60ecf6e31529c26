//! Application Lifecycle Shell
//!
//! Configures and launches an axum server through an explicit, strictly
//! ordered lifecycle. Extension happens through the [`AppHooks`] strategy
//! object passed at construction; the shell itself owns the feature wiring.
//!
//! # Lifecycle Phases
//!
//! ```text
//! 1. Builder (identity + features + hooks)
//!    ↓
//! 2. Mount
//!    ├─ build pass: feature services against the ContextBuilder
//!    ├─ on_build hook
//!    ├─ context built
//!    ├─ mounted pass: middleware + routes against the built context
//!    └─ on_mounted hook
//!    ↓
//! 3. Install (on_install hook, one-time setup)
//!    ↓
//! 4. Run (on_run hook, serve until shutdown signal)
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown Signal (SIGTERM/SIGINT)
//!    ↓
//! 6. on_quit hook
//! ```
//!
//! Install and run before mount is a programming error and fails with
//! [`AppError::NotMounted`].
//!
//! # Example
//!
//! ```rust,no_run
//! use plinth::app::App;
//!
//! #[tokio::main]
//! async fn main() -> plinth::Result<()> {
//!     let app = App::builder()
//!         .name("demo")
//!         .description("Default app template")
//!         .build()?
//!         .initialize(std::env::args())
//!         .await?;
//!
//!     app.run(None).await?;
//!     Ok(())
//! }
//! ```

mod builder;
mod context;
mod descriptor;
mod error;
mod hooks;
mod shell;
mod shutdown;

pub use builder::AppBuilder;
pub use context::{Attachments, ContextBuilder, MountedContext};
pub use descriptor::AppDescriptor;
pub use error::{AppError, Result};
pub use hooks::{AppHooks, NoHooks};
pub use shell::App;
pub use shutdown::shutdown_signal;
