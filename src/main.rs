mod cli;
mod error;
mod fetcher;
mod file;
mod model;
mod pipeline;
mod pool;
mod saver;
mod utils;

use std::process::exit;

use tracing::{error, info};

use crate::cli::{build_cli, Config};
use crate::fetcher::FetchClient;
use crate::pipeline::Pipeline;
use crate::saver::PhotoSaver;
use crate::utils::{init_tracing, timed};

#[tokio::main]
async fn main() {
    init_tracing();

    let matches = build_cli();
    let config = Config::from_matches(&matches).unwrap_or_else(|err| {
        eprintln!("{}", err);
        exit(2);
    });

    let pipeline = Pipeline::new(
        FetchClient::new(),
        PhotoSaver::new(config.output),
        config.photos_url,
        config.albums_url,
        config.workers,
    );

    match timed("download", pipeline.run()).await {
        Ok(summary) => {
            info!(saved = summary.saved, failed = summary.failed, "run complete");
            exit(0);
        }
        Err(err) => {
            error!(error = %err, "❌  run aborted, photo metadata unavailable");
            exit(1);
        }
    }
}
