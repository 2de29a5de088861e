pub mod errors;
pub mod models;
pub mod pipeline;

pub use errors::ManabiError;
pub use models::{ JlptLevel, Sentence, SentenceType, StudyStatus };
