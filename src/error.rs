use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("forecast unavailable: {0}")]
    ForecastUnavailable(String),

    #[error("decision service unavailable: {0}")]
    DecisionServiceUnavailable(String),

    #[error("malformed reply: {reason}")]
    MalformedReply { reason: String, reply: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AgentError {
    /// Short label used on the run transcript.
    pub fn label(&self) -> &'static str {
        match self {
            AgentError::ForecastUnavailable(_) => "forecast unavailable",
            AgentError::DecisionServiceUnavailable(_) => "decision service unavailable",
            AgentError::MalformedReply { .. } => "malformed reply",
            AgentError::Config(_) => "configuration",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AgentError::ForecastUnavailable(msg)
            | AgentError::DecisionServiceUnavailable(msg)
            | AgentError::Config(msg) => msg,
            AgentError::MalformedReply { reason, .. } => reason,
        }
    }

    /// The model reply that could not be classified, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            AgentError::MalformedReply { reply, .. } => Some(reply),
            _ => None,
        }
    }
}
