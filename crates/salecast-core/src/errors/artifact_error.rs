/// Errors raised while loading the serialized model artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to load artifact at {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("malformed artifact at {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("encoder at {path} has no classes")]
    EmptyEncoder { path: String },

    #[error("model expects {expected} features but was given {actual}")]
    FeatureCountMismatch { expected: usize, actual: usize },
}
