#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("symptom description is required")]
    EmptyInput,
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;
