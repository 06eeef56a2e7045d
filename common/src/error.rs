use thiserror::Error;

#[derive(Debug, Error)]
pub enum GreetError {
    #[error("failed to write greeting: {0}")]
    Write(#[source] std::io::Error),
}
