use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors raised while loading the source CSV. All of these abort the run;
/// there is no partial recovery from a bad dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to open dataset at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataset at {path} is missing required column '{column}'")]
    MissingColumn { path: String, column: String },
}
