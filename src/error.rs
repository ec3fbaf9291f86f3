#[derive(Debug)]
pub enum PresentationError {
    SourceNotSpecified,
    InvalidRatio(String),
    Options(serde_json::Error),
}

impl From<serde_json::Error> for PresentationError {
    fn from(error: serde_json::Error) -> Self {
        PresentationError::Options(error)
    }
}
