use thiserror::Error;

/// Input rejected before anything is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("enter at least one VOD url")]
    NoVodUrls,

    #[error("select a VOD first")]
    NoVodSelected,

    #[error("number of personas must be between 1 and {max}, got \"{raw}\"")]
    InvalidPersonaCount { raw: String, max: u32 },
}
