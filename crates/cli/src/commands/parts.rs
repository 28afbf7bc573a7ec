//! parts command - List the path segments of a URI
//!
//! The first segment is the empty root placeholder whenever the URI has a key.

use clap::Args;

use super::parse_locator;
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List the path segments of a URI
#[derive(Args, Debug)]
pub struct PartsArgs {
    /// Locator URI (scheme://bucket[/key])
    pub uri: String,
}

/// Execute the parts command
pub fn execute(args: PartsArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    if formatter.is_json() {
        formatter.json(locator.parts());
    } else {
        for part in locator.parts() {
            formatter.println(part);
        }
    }

    ExitCode::Success
}
