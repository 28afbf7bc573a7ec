//! inspect command - Show every component of a URI
//!
//! Prints scheme, bucket, key, the derived name accessors and the segment
//! sequence. Human output is a two-column table.

use clap::Args;
use comfy_table::{presets::UTF8_FULL, Cell, Table};

use super::{parse_locator, LocatorOutput};
use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Show every component of a URI
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Locator URI (scheme://bucket[/key])
    pub uri: String,
}

/// Execute the inspect command
pub fn execute(args: InspectArgs, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let locator = match parse_locator(&args.uri, &formatter) {
        Ok(l) => l,
        Err(code) => return code,
    };
    let output = LocatorOutput::from(&locator);

    if formatter.is_json() {
        formatter.json(&output);
    } else {
        formatter.println(&render_table(&output, &formatter).to_string());
    }

    ExitCode::Success
}

fn render_table(output: &LocatorOutput, formatter: &Formatter) -> Table {
    let quote_all = |items: &[String]| {
        items
            .iter()
            .map(|s| format!("{s:?}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let rows = [
        ("Scheme", output.scheme.clone()),
        ("Bucket", output.bucket.clone()),
        ("Key", output.key.clone()),
        ("Name", output.name.clone()),
        ("Stem", output.stem.clone()),
        ("Suffix", output.suffix.clone()),
        ("Suffixes", quote_all(&output.suffixes)),
        ("Parts", quote_all(&output.parts)),
        ("Query", output.query.clone().unwrap_or_default()),
        ("Fragment", output.fragment.clone().unwrap_or_default()),
    ];

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    for (label, value) in rows {
        table.add_row(vec![Cell::new(formatter.label(label)), Cell::new(value)]);
    }
    table
}
