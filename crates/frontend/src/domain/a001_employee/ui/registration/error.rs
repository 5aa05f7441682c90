use thiserror::Error;

/// Why a submission did not end in a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never produced a response (offline, CORS, server down)
    #[error("Could not reach the registration service. See the browser console for details.")]
    Network(String),

    /// Non-ok response carrying a `message` in its body
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Non-ok response without a usable body
    #[error("The server returned an error (HTTP {status}).")]
    Status { status: u16 },
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(_) => None,
            Self::Server { status, .. } | Self::Status { status } => Some(*status),
        }
    }
}
