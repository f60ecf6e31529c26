//! Default app template
//!
//! The canonical entry-point flow: build, initialize with the process
//! arguments, run until a shutdown signal.

use plinth::prelude::*;

struct DemoHooks;

#[async_trait]
impl AppHooks for DemoHooks {
    fn routes(&self) -> Router {
        Router::new().route("/", get(|| async { "plinth-demo is running" }))
    }

    async fn on_install(&self, _ctx: &MountedContext) -> plinth::anyhow::Result<()> {
        tracing::info!("Install complete");
        Ok(())
    }

    async fn on_quit(&self) -> plinth::anyhow::Result<()> {
        tracing::info!("Goodbye");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> plinth::Result<()> {
    let app = App::builder()
        .name("plinth-demo")
        .version(Version::new(0, 1, 0))
        .description("Default app template")
        .hooks(DemoHooks)
        .build()?
        .initialize(std::env::args())
        .await?;

    app.run(None).await?;
    Ok(())
}
