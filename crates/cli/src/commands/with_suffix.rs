//! with-suffix command - Replace the suffix of the final segment
//!
//! An empty suffix removes the current one.

use clap::Args;

use super::{parse_locator, report, LocatorOutput};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Replace the suffix of the final segment of a URI
#[derive(Args, Debug)]
pub struct WithSuffixArgs {
    /// Locator URI (scheme://bucket/key)
    pub uri: String,

    /// New suffix including the leading dot, or "" to remove it
    #[arg(allow_hyphen_values = true)]
    pub suffix: String,
}

/// Execute the with-suffix command
pub fn execute(args: WithSuffixArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    match locator.with_suffix(&args.suffix) {
        Ok(changed) => {
            formatter.output(&LocatorOutput::from(&changed));
            ExitCode::Success
        }
        Err(e) => report(&e, &formatter),
    }
}
