use std::path::Path;

use projector_protocol::Event;

use crate::input::load_events;
use crate::{CmdResult, OutputFormat};

pub(crate) fn cmd_decode(input: &Path, output: OutputFormat, verbose: bool) -> CmdResult {
    let events = load_events(input)?;

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        OutputFormat::Text => {
            for (i, event) in events.iter().enumerate() {
                if verbose {
                    println!("{}: {:?}", i, event);
                } else {
                    println!("{}: {}", i, summarize(event));
                }
            }
        }
    }
    Ok(())
}

/// One-line description of an event for text output.
fn summarize(event: &Event) -> String {
    match event {
        Event::WindowSetChanged(ws) => {
            format!("WindowSetChanged ({} windows)", ws.window_data_list.len())
        }
        Event::DrawCommands(dc) => {
            format!("DrawCommands ({} draw events)", dc.draw_events.len())
        }
        Event::Clipboard(c) => format!("Clipboard ({} chars)", c.string_content.chars().count()),
        other => other.kind_name().to_string(),
    }
}
