use clap::Parser;
use std::io;
use tracing::error;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
use xmlemit::cli::{run, Args};

fn main() {
    // Logs go to stderr so stdout carries only the document
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args, io::stdout().lock()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
