use landing_core::{app::App, cli};

#[tokio::main]
async fn main() -> landing_core::Result<()> {
    cli::main::<App>().await
}
