use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
///
/// `pretty` only affects `json`; `raw` is always a single line.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json | OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, pretty: bool) -> anyhow::Result<()> {
    let rendered = render(value, format, pretty)?;
    println!("{rendered}");
    Ok(())
}
