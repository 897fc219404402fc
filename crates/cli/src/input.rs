use std::io::Read;
use std::path::Path;

use projector_protocol::Event;

use crate::error::CliError;

/// Read a batch from `path`, or from stdin when the path is `-`.
pub(crate) fn read_batch(path: &Path) -> Result<String, CliError> {
    let shown = path.display().to_string();
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: shown.clone(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: shown.clone(),
            source,
        })?
    };
    tracing::info!(path = %shown, bytes = text.len(), "read batch");
    Ok(text)
}

/// Read and decode a batch.
pub(crate) fn load_events(path: &Path) -> Result<Vec<Event>, CliError> {
    let text = read_batch(path)?;
    projector_decoder::decode(&text).map_err(|source| CliError::Decode {
        path: path.display().to_string(),
        source,
    })
}
