use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Invalid date: {value}")]
    InvalidDate { value: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Guests cannot {action}")]
    GuestNotAllowed { action: String },

    #[error("{role} cannot {action}")]
    Forbidden { role: String, action: String },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PortalResult<T> = Result<T, PortalError>;
