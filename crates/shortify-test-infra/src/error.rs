use thiserror::Error;

/// Failures while standing up test fixtures.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("failed to start container: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("failed to reach containerized redis: {0}")]
    Redis(#[from] redis::RedisError),

    /// The fake REST server could not bind or inspect its socket.
    #[error("fake store socket error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TestInfraError>;
