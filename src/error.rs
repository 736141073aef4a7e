use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("desktop host bridge is not available")]
    HostUnavailable,
    #[error("no response from {command} command")]
    NoResponse { command: String },
    #[error("{command} command failed: {message}")]
    Rejected { command: String, message: String },
    #[error("failed to encode arguments for {command}: {message}")]
    Encode { command: String, message: String },
    #[error("failed to decode {command} response: {message}")]
    Decode { command: String, message: String },
}
