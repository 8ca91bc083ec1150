//! gradecast - CLI entry point

use clap::Parser;
use gradecast::cli::{Args, Verbosity};
use gradecast::config::Config;
use gradecast::errors::{PredictError, Result};
use gradecast::fetch::GatewayClient;
use gradecast::pipeline::Pipeline;
use gradecast::report;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Map verbosity flags to a tracing filter, set once at process start
fn init_tracing(verbosity: Verbosity) {
    let default_filter = match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => "warn",
        Verbosity::Verbose => "info",
        Verbosity::VeryVerbose => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Diagnostics go to stderr; stdout carries only predictions and errors
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Validate arguments and drive the pipeline; every failure surfaces
/// as a `PredictError` so main has exactly one error boundary
async fn run(args: &Args) -> Result<Vec<f64>> {
    // Usage errors bail out before any client is built
    let (dataset_cid, model_cid, scaler_cid) =
        args.validate().map_err(PredictError::Usage)?;

    let config = Config::load().unwrap_or_else(|e| {
        warn!("falling back to default config: {}", e);
        Config::default()
    });

    let gateway = args
        .gateway
        .clone()
        .unwrap_or_else(|| config.gateway_host().to_string());
    let sampling_mode = args.sampling_mode.unwrap_or_else(|| config.sampling_mode());

    let client = GatewayClient::new(&gateway)?;
    let pipeline = Pipeline::new(client, args.working_dir(), sampling_mode);
    pipeline.run(&dataset_cid, &model_cid, &scaler_cid).await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbosity());

    match run(&args).await {
        Ok(predictions) => {
            report::emit(&predictions);
        }
        // The usage line prints bare, everything else gets the error prefix;
        // both go to stdout and exit 1
        Err(PredictError::Usage(usage)) => {
            println!("{}", usage);
            std::process::exit(1);
        }
        Err(e) => {
            println!("Error occurred: {}", e);
            std::process::exit(1);
        }
    }
}
