use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },
}
