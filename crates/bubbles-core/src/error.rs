pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("record {row} (id {id:?}) has no total_amount")]
    MissingMagnitude { row: usize, id: String },

    #[error("record {row} (id {id:?}) has an invalid total_amount: {value:?}")]
    InvalidMagnitude {
        row: usize,
        id: String,
        value: String,
    },

    #[error("node {node_id:?} has {attribute} value {value:?} with no anchor in mode {mode}")]
    UnknownCategory {
        mode: &'static str,
        attribute: &'static str,
        value: String,
        node_id: String,
    },

    #[error("anchor map and label set of mode {mode} disagree on key {key:?}")]
    LabelMismatch { mode: &'static str, key: String },

    #[error("unknown mode trigger: {trigger:?}")]
    UnknownMode { trigger: String },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    #[error(transparent)]
    Physics(#[from] narwhal::Error),
}
