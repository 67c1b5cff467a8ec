use forms::FormError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("{endpoint} rejected the submission with HTTP {status}")]
    Rejected { endpoint: &'static str, status: u16 },
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
