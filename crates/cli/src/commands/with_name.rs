//! with-name command - Replace the final segment of a URI

use clap::Args;

use super::{parse_locator, report, LocatorOutput};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Replace the final segment of a URI
#[derive(Args, Debug)]
pub struct WithNameArgs {
    /// Locator URI (scheme://bucket/key)
    pub uri: String,

    /// New final segment
    #[arg(allow_hyphen_values = true)]
    pub name: String,
}

/// Execute the with-name command
pub fn execute(args: WithNameArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    match locator.with_name(&args.name) {
        Ok(renamed) => {
            formatter.output(&LocatorOutput::from(&renamed));
            ExitCode::Success
        }
        Err(e) => report(&e, &formatter),
    }
}
