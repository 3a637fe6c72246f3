use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no Gemini API key configured")]
    MissingApiKey,

    #[error("request to Gemini failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Gemini returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Gemini blocked the request: {0}")]
    Blocked(String),

    #[error("no response text from Gemini")]
    EmptyResponse,

    #[error("Gemini response is not valid camera settings JSON: {0}")]
    MalformedResponse(String),
}
