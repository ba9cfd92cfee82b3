/// Violated input constraints.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("group count {k} outside [1, {n}]")]
    InvalidGroupCount { k: usize, n: usize },

    #[error("clustering needs at least {min} records, got {n}")]
    TooFewRecords { n: usize, min: usize },

    #[error("non-finite value in feature vector {row}, column {column}")]
    NonFiniteFeature { row: usize, column: String },

    #[error("duplicate record identifier: {id}")]
    DuplicateIdentifier { id: String },

    #[error("record {row} has no identifier")]
    MissingIdentifier { row: usize },

    #[error("no group counts requested")]
    EmptyGroupCounts,

    #[error("invalid group count list: {raw:?}")]
    InvalidGroupCountList { raw: String },

    #[error("feature row {row} has {got} columns, expected {expected}")]
    FeatureWidthMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("assignment covers {got} records, expected {expected}")]
    AssignmentLengthMismatch { expected: usize, got: usize },
}
