use std::collections::BTreeMap;
use std::path::Path;

use projector_protocol::Event;

use crate::input::load_events;
use crate::{CmdResult, OutputFormat};

/// Per-kind counts of one batch.
#[derive(Debug, Default, PartialEq, Eq)]
struct BatchStats {
    events: BTreeMap<&'static str, usize>,
    draw_commands: BTreeMap<&'static str, usize>,
}

impl BatchStats {
    fn collect(events: &[Event]) -> Self {
        let mut stats = BatchStats::default();
        for event in events {
            *stats.events.entry(event.kind_name()).or_default() += 1;
            if let Event::DrawCommands(dc) = event {
                for draw in &dc.draw_events {
                    *stats.draw_commands.entry(draw.kind_name()).or_default() += 1;
                }
            }
        }
        stats
    }

    fn total_events(&self) -> usize {
        self.events.values().sum()
    }

    fn total_draw_commands(&self) -> usize {
        self.draw_commands.values().sum()
    }
}

pub(crate) fn cmd_stats(input: &Path, output: OutputFormat) -> CmdResult {
    let events = load_events(input)?;
    let stats = BatchStats::collect(&events);

    match output {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "total_events": stats.total_events(),
                "total_draw_commands": stats.total_draw_commands(),
                "events": stats.events,
                "draw_commands": stats.draw_commands,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            println!("events: {}", stats.total_events());
            for (kind, count) in &stats.events {
                println!("  {} {}", kind, count);
            }
            println!("draw commands: {}", stats.total_draw_commands());
            for (kind, count) in &stats.draw_commands {
                println!("  {} {}", kind, count);
            }
        }
    }
    Ok(())
}
