use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read taxonomy at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("taxonomy parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate class: {0}")]
    DuplicateClass(String),

    #[error("class '{class}' has unknown parent '{parent}'")]
    UnknownParent { class: String, parent: String },

    #[error("class hierarchy contains a cycle through '{0}'")]
    Cycle(String),

    #[error("taxonomy has no class for label: {0}")]
    MissingLabel(String),

    #[error("unknown class: {0}")]
    UnknownClass(String),

    #[error("individual already exists: {0}")]
    DuplicateIndividual(String),

    #[error("not an individual in this scope: {0}")]
    NotAnIndividual(String),

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),
}
