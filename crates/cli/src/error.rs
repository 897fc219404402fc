use projector_decoder::DecodeError;

/// Errors surfaced by CLI commands. Each one ends the process with exit code 1.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("error writing '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("decode error in '{path}': {source}")]
    Decode { path: String, source: DecodeError },

    #[error("image {image_id}: invalid base64 payload: {source}")]
    Image {
        image_id: String,
        source: base64::DecodeError,
    },

    #[error("internal error: {0}")]
    Serialize(#[from] serde_json::Error),
}
