//! Classifier artifact loading.
//!
//! Artifacts are read once at startup. The serialization format is chosen by file extension:
//! `.json` for JSON and `.yaml`/`.yml` for YAML. Any failure here is fatal to the process; there is
//! no retry and no fallback model.

use crate::classifier::{ModelArtifact, TextModel};
use crate::constants::MODEL_FORMAT_VERSION;
use crate::{DoshaError, DoshaResult};
use std::path::Path;

/// Serialization formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Yaml,
}

impl ArtifactFormat {
    /// Infers the format from the extension of `path`.
    pub fn from_path(path: &Path) -> DoshaResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(ArtifactFormat::Json),
            "yaml" | "yml" => Ok(ArtifactFormat::Yaml),
            _ => Err(DoshaError::UnsupportedArtifactExtension(
                path.display().to_string(),
            )),
        }
    }
}

/// Reads, parses and validates the classifier artifact at `path`.
///
/// # Errors
///
/// Returns an error if:
/// - the extension is not a supported artifact format,
/// - the file cannot be read,
/// - the contents cannot be deserialized,
/// - the artifact declares an unsupported `format_version`, or
/// - the model's internal shapes are inconsistent.
pub fn load_model(path: &Path) -> DoshaResult<TextModel> {
    let format = ArtifactFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| DoshaError::ModelRead {
        path: path.to_path_buf(),
        source,
    })?;

    let model = parse_model(&contents, format)?;
    tracing::info!(
        "loaded {} classifier from {} ({} labels)",
        model.kind(),
        path.display(),
        crate::Classifier::labels(&model).len()
    );
    Ok(model)
}

/// Parses and validates an artifact held in memory.
pub fn parse_model(contents: &str, format: ArtifactFormat) -> DoshaResult<TextModel> {
    let artifact: ModelArtifact = match format {
        ArtifactFormat::Json => serde_json::from_str(contents).map_err(DoshaError::ModelJson)?,
        ArtifactFormat::Yaml => serde_yaml::from_str(contents).map_err(DoshaError::ModelYaml)?,
    };

    if artifact.format_version != MODEL_FORMAT_VERSION {
        return Err(DoshaError::UnsupportedFormatVersion(artifact.format_version));
    }

    artifact.model.validate()?;
    Ok(artifact.model)
}
