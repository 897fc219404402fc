use std::collections::HashSet;
use std::path::Path;

use projector_protocol::{Event, ImageId};

use crate::error::CliError;
use crate::input::load_events;
use crate::{CmdResult, OutputFormat};

pub(crate) fn cmd_extract_images(
    input: &Path,
    out_dir: &Path,
    output: OutputFormat,
    quiet: bool,
) -> CmdResult {
    let events = load_events(input)?;

    std::fs::create_dir_all(out_dir).map_err(|source| CliError::Write {
        path: out_dir.display().to_string(),
        source,
    })?;

    let mut written = Vec::new();
    let mut used = HashSet::new();
    for event in &events {
        let Event::ImageDataReply(reply) = event else {
            continue;
        };
        let image_id = reply.image_id.to_string();
        let Some(bytes) = reply.image_data.png_bytes() else {
            tracing::info!(image_id = %image_id, "skipping empty image");
            continue;
        };
        let bytes = bytes.map_err(|source| CliError::Image {
            image_id: image_id.clone(),
            source,
        })?;
        let path = out_dir.join(file_name(&reply.image_id, &mut used));
        std::fs::write(&path, &bytes).map_err(|source| CliError::Write {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote image");
        written.push(path.display().to_string());
    }

    match output {
        OutputFormat::Json => {
            let result = serde_json::json!({ "written": written });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            if !quiet {
                println!("wrote {} images to {}", written.len(), out_dir.display());
            }
        }
    }
    Ok(())
}

/// File name for an image, safe to join onto the output directory.
///
/// Characters outside `[A-Za-z0-9._-]` become `_`. A name already handed
/// out in this run gets a `-2`, `-3`, ... suffix.
fn file_name(image_id: &ImageId, used: &mut HashSet<String>) -> String {
    let stem: String = image_id
        .to_string()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let mut name = format!("{}.png", stem);
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}.png", stem, n);
        n += 1;
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unknown(class_name: &str) -> ImageId {
        ImageId::Unknown {
            class_name: class_name.to_string(),
        }
    }

    #[test]
    fn test_file_name_replaces_separators() {
        let mut used = HashSet::new();
        assert_eq!(file_name(&unknown("a/b"), &mut used), "unknown-a_b.png");
        assert_eq!(file_name(&unknown("..\\x y"), &mut used), "unknown-.._x_y.png");
    }

    #[test]
    fn test_file_name_keeps_plain_ids() {
        let mut used = HashSet::new();
        let id = ImageId::BufferedImageId {
            identity_hash: -5,
            state_hash: 7,
        };
        assert_eq!(file_name(&id, &mut used), "buffered--5-7.png");
    }

    #[test]
    fn test_file_name_suffixes_repeats() {
        let mut used = HashSet::new();
        let id = ImageId::PVolatileImageId { id: 9 };
        assert_eq!(file_name(&id, &mut used), "volatile-9.png");
        assert_eq!(file_name(&id, &mut used), "volatile-9-2.png");
        assert_eq!(file_name(&id, &mut used), "volatile-9-3.png");
    }

    #[test]
    fn test_file_name_sanitized_collision() {
        let mut used = HashSet::new();
        assert_eq!(file_name(&unknown("a/b"), &mut used), "unknown-a_b.png");
        assert_eq!(file_name(&unknown("a_b"), &mut used), "unknown-a_b-2.png");
    }
}
