/// Shape errors raised when building fixed-size model values from dynamic input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("{what} expects {expected} values, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown {kind} name: {name}")]
    UnknownDimension { kind: &'static str, name: String },
}
