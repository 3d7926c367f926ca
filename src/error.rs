// Error types for client calls and the dashboard templating workflow
use std::fmt;
use thiserror::Error;

pub type Result<T, E = SdcError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum SdcError {
    /// Non-2xx response from the service.
    #[error("request failed with status {status}: {message}")]
    Transport { status: u16, message: String },

    /// The service rejected the shape of the submitted payload.
    #[error("request rejected with status {status}: {message}")]
    Validation { status: u16, message: String },

    #[error("failed to reach the monitoring service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("sampling time {0}s is not supported")]
    UnsupportedSampling(u64),
}

impl SdcError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SdcError::Transport { status, .. } | SdcError::Validation { status, .. } => {
                Some(*status)
            }
            SdcError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Step of the templating workflow a failure happened in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateStage {
    Resolving,
    Materializing { view: usize, group_id: String },
    Publishing,
}

impl fmt::Display for TemplateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateStage::Resolving => write!(f, "fetching dashboards"),
            TemplateStage::Materializing { view, group_id } => write!(
                f,
                "creating grouping configuration '{}' for view {}",
                group_id, view
            ),
            TemplateStage::Publishing => write!(f, "creating dashboard"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("can't find dashboard '{0}' to use as a template")]
    TemplateNotFound(String),

    #[error("dashboard '{name}' already exists - {identifier}")]
    AlreadyExists { name: String, identifier: String },

    /// `orphaned` lists grouping configurations created before the failure.
    /// They are not removed.
    #[error("{stage} failed: {source}")]
    Failed {
        stage: TemplateStage,
        orphaned: Vec<String>,
        #[source]
        source: SdcError,
    },
}
