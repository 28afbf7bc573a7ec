//! relative command - Show a URI's key relative to a base URI

use clap::Args;
use serde::Serialize;

use super::{parse_locator, report};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Show a URI's key relative to a base URI
#[derive(Args, Debug)]
pub struct RelativeArgs {
    /// Locator URI (scheme://bucket/key)
    pub uri: String,

    /// Base URI the locator should live under
    pub base: String,
}

#[derive(Debug, Serialize)]
struct RelativeOutput {
    uri: String,
    base: String,
    relative: String,
}

impl std::fmt::Display for RelativeOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.relative)
    }
}

/// Execute the relative command
pub fn execute(args: RelativeArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };
    let base = match parse_locator(&args.base, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };

    match locator.relative_to(&base) {
        Ok(relative) => {
            formatter.output(&RelativeOutput {
                uri: locator.to_string(),
                base: base.to_string(),
                relative,
            });
            ExitCode::Success
        }
        Err(e) => report(&e, &formatter),
    }
}
