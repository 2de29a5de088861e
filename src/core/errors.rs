use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManabiError {
    #[error("quality rating {0} is out of range (expected 0-5)")]
    InvalidQualityRating(u8),

    #[error("text is empty or whitespace-only")]
    EmptyText,

    #[error("text contains characters with no kana reading")]
    MissingReading,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
