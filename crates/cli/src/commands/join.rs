//! join command - Append keys to a URI
//!
//! By default each key is split on `/` so the result re-parses to the same
//! segments. `--literal` appends each key as one segment, verbatim.

use clap::Args;

use super::{parse_locator, LocatorOutput};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Append keys to a URI
#[derive(Args, Debug)]
pub struct JoinArgs {
    /// Locator URI (scheme://bucket[/key])
    pub uri: String,

    /// Keys to append
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Append each key as a single segment without splitting it
    #[arg(long)]
    pub literal: bool,
}

/// Execute the join command
pub fn execute(args: JoinArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    let joined = if args.literal {
        if args.keys.iter().any(|k| k.contains(['/', '?', '#'])) {
            formatter.warning(
                "Literal key contains '/', '?' or '#'; the URI will re-parse differently",
            );
        }
        args.keys.iter().fold(locator, |acc, key| acc.child(key))
    } else {
        locator.joinpath(&args.keys)
    };

    formatter.output(&LocatorOutput::from(&joined));
    ExitCode::Success
}
