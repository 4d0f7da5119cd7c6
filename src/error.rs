use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Product code already in use: {0}")]
    CodeInUse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
