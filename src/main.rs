use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use fitscore::{
    http, init_logging, CliArgs, FileBackend, InMemoryBackend, RecordBackend, ServerConfig,
    ShoeStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_args(CliArgs::parse())?;
    config.validate()?;
    init_logging(config.log_format)?;

    let bind = config.bind.to_string();
    match &config.data_file {
        Some(path) => {
            let backend = FileBackend::open(path)
                .with_context(|| format!("cannot open data file {}", path.display()))?;
            tracing::info!(path = %path.display(), "using file backend");
            run(backend, &bind).await
        }
        None => {
            tracing::info!("using in-memory backend");
            run(InMemoryBackend::new(), &bind).await
        }
    }
}

async fn run<B: RecordBackend + 'static>(backend: B, bind: &str) -> anyhow::Result<()> {
    let store = Arc::new(ShoeStore::new(backend));
    http::serve(store, bind)
        .await
        .with_context(|| format!("server on {} failed", bind))
}
