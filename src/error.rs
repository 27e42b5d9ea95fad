use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("breakpoint table must contain at least one profile")]
    EmptyBreakpointTable,

    #[error("invalid breakpoint profile at {index}: {reason}")]
    InvalidProfile { index: usize, reason: String },

    #[error("missing {role} element for selector `{selector}`")]
    MissingElement {
        role: &'static str,
        selector: String,
    },

    #[error("no items matched selector `{selector}`")]
    NoItems { selector: String },

    #[error("invalid css length `{0}`")]
    InvalidLength(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
