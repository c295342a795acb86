use std::process::ExitCode;

use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let args = mandel_movie::MovieArgs::parse();
    let default_level = if args.quiet { "warn" } else { "info" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .try_init();

    match mandel_movie::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
