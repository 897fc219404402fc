use std::path::Path;

use crate::input::load_events;
use crate::{CmdResult, OutputFormat};

pub(crate) fn cmd_check(input: &Path, output: OutputFormat, quiet: bool) -> CmdResult {
    let events = load_events(input)?;

    match output {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "status": "ok",
                "events": events.len(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            if !quiet {
                println!("ok: {} events", events.len());
            }
        }
    }
    Ok(())
}
