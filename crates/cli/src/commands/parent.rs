//! parent command - Show the parent of a URI
//!
//! The parent of a bucket root is the root itself.

use clap::Args;

use super::{parse_locator, LocatorOutput};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Show the parent (or all ancestors) of a URI
#[derive(Args, Debug)]
pub struct ParentArgs {
    /// Locator URI (scheme://bucket[/key])
    pub uri: String,

    /// List every ancestor, nearest first
    #[arg(short, long)]
    pub all: bool,
}

/// Execute the parent command
pub fn execute(args: ParentArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    if args.all {
        let parents: Vec<LocatorOutput> =
            locator.parents().iter().map(LocatorOutput::from).collect();
        if formatter.is_json() {
            formatter.json(&parents);
        } else {
            for parent in &parents {
                formatter.println(&parent.to_string());
            }
        }
    } else {
        formatter.output(&LocatorOutput::from(&locator.parent()));
    }

    ExitCode::Success
}
