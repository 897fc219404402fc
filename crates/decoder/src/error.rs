use std::fmt;

/// Semantic kind a field is required to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    Short,
    Int,
    Long,
    Float,
    Double,
    String,
    Array,
    Map,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Bool => "bool",
            FieldKind::Short => "short",
            FieldKind::Int => "int",
            FieldKind::Long => "long",
            FieldKind::Float => "float",
            FieldKind::Double => "double",
            FieldKind::String => "string",
            FieldKind::Array => "array",
            FieldKind::Map => "map",
        };
        f.write_str(name)
    }
}

/// Structural kind actually found on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Map,
    /// The key is not present in its map.
    Absent,
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WireKind::Null => "null",
            WireKind::Bool => "bool",
            WireKind::Number => "number",
            WireKind::String => "string",
            WireKind::Array => "array",
            WireKind::Map => "map",
            WireKind::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Errors during wire decoding. Decoding stops at the first one.
///
/// Paths are JSON-path-like (`$[2].b[0].a`) and locate the offending value
/// inside the batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input text is not well-formed JSON.
    #[error("syntax error: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A `[tag, content]` pair does not have exactly two elements.
    #[error("{sum_type} pair at '{path}': expected {expected} elements, found {actual}")]
    Arity {
        sum_type: &'static str,
        path: String,
        expected: usize,
        actual: usize,
    },

    /// A value does not have the kind its field requires.
    #[error("field '{key}': expected {expected}, found {actual}")]
    TypeMismatch {
        key: String,
        expected: FieldKind,
        actual: WireKind,
    },

    /// A tag is not part of its sum type's closed tag set.
    #[error("unsupported {sum_type} tag '{tag}' at '{path}'")]
    UnsupportedTag {
        sum_type: &'static str,
        tag: String,
        path: String,
    },
}

impl DecodeError {
    /// Prefix the error location with the path of an enclosing value.
    pub(crate) fn within(mut self, parent: &str) -> Self {
        match &mut self {
            DecodeError::Syntax { .. } => {}
            DecodeError::Arity { path, .. } | DecodeError::UnsupportedTag { path, .. } => {
                *path = join_path(parent, path);
            }
            DecodeError::TypeMismatch { key, .. } => {
                *key = join_path(parent, key);
            }
        }
        self
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_string()
    } else if parent.is_empty() || child.starts_with('[') {
        format!("{}{}", parent, child)
    } else {
        format!("{}.{}", parent, child)
    }
}
