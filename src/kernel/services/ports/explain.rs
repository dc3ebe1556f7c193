use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub type ExplainFuture = Pin<Box<dyn Future<Output = Result<String, ExplainError>> + Send + 'static>>;

/// The language-model backend that turns a prompt into an explanation.
pub trait ExplainService: Send + Sync + 'static {
    fn explain(&self, prompt: String) -> ExplainFuture;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    Network(String),
    Timeout(Duration),
    Status(u16),
    Malformed(String),
}

impl fmt::Display for ExplainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplainError::Network(msg) => write!(f, "Could not reach the model service: {}", msg),
            ExplainError::Timeout(after) => {
                write!(f, "The model service did not answer within {}s", after.as_secs())
            }
            ExplainError::Status(code) => {
                write!(f, "The model service returned HTTP status {}", code)
            }
            ExplainError::Malformed(msg) => {
                write!(f, "The model service sent an unexpected response: {}", msg)
            }
        }
    }
}

impl std::error::Error for ExplainError {}

/// What the overlay eventually shows for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplainOutcome {
    Success(String),
    Failure(String),
}

impl From<Result<String, ExplainError>> for ExplainOutcome {
    fn from(result: Result<String, ExplainError>) -> Self {
        match result {
            Ok(text) => ExplainOutcome::Success(text),
            Err(err) => ExplainOutcome::Failure(err.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 11434,
            path: "/api/generate".to_string(),
            model: "mistral".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ExplainConfig {
    pub fn endpoint(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };
        format!("http://{}:{}{}", self.host, self.port, path)
    }
}
