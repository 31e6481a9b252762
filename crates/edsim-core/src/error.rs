use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown hospital: {0}")]
    UnknownHospital(String),

    #[error("unknown weather condition: {0}")]
    UnknownWeather(String),
}
