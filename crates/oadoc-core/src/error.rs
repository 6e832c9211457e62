use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("document root is not an object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported reference (only local '#/' pointers resolve): {0}")]
    UnsupportedRef(String),

    #[error("reference target not found: {0}")]
    RefTargetNotFound(String),

    #[error("circular reference detected: {0}")]
    CircularRef(String),
}
