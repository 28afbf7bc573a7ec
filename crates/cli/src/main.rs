//! s3path - path operations on object storage URIs
//!
//! Parses URIs like s3://bucket/dir/file.tar.gz and prints their components
//! or rewritten forms. Never contacts the object store.

use clap::Parser;
use s3path_cli::commands::{self, Cli};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine readable
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let exit_code = commands::execute(cli);

    std::process::exit(exit_code.as_i32());
}
