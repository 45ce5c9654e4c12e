use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing column '{column}' in {table}")]
    MissingColumn { table: String, column: String },

    #[error("Schema error in {table}: {message}")]
    Schema { table: String, message: String },

    #[error("LaTeX rendering failed: {0}")]
    Latex(String),

    #[error("Figure rendering failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
