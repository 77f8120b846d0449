use std::path::PathBuf;

use epibooks::interface::shell::{self, ShellConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdoutは対話用。ログはstderrへ。
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let export_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ShellConfig::from_env(export_path)?;

    shell::run(config).await
}
