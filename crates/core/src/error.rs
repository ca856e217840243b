#[derive(Debug, thiserror::Error)]
pub enum DoshaError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(
        "failed to read model artifact (path: {path}): {source}",
        path = path.display()
    )]
    ModelRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to deserialize JSON model artifact: {0}")]
    ModelJson(serde_json::Error),
    #[error("failed to deserialize YAML model artifact: {0}")]
    ModelYaml(serde_yaml::Error),
    #[error("unsupported model artifact extension: {0}")]
    UnsupportedArtifactExtension(String),
    #[error("unsupported model artifact format version: {0}")]
    UnsupportedFormatVersion(u32),
    #[error("invalid model artifact: {0}")]
    InvalidModel(String),

    #[error("classifier failed: {0}")]
    Classifier(String),
    #[error("unknown prediction label: {0}")]
    UnknownPredictionLabel(String),
}

impl DoshaError {
    /// Whether the error means the classifier artifact could not be made available.
    ///
    /// These only occur while loading at startup.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(
            self,
            DoshaError::ModelRead { .. }
                | DoshaError::ModelJson(_)
                | DoshaError::ModelYaml(_)
                | DoshaError::UnsupportedArtifactExtension(_)
                | DoshaError::UnsupportedFormatVersion(_)
                | DoshaError::InvalidModel(_)
        )
    }
}

pub type DoshaResult<T> = std::result::Result<T, DoshaError>;
