use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("duplicate story id: {0}")]
    DuplicateStory(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("artifact output failed for {path}: {source}")]
    ArtifactOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
