use thiserror::Error;

/// Why a texture could not be generated or a preset not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// No registered preset has this name.
    #[error("no preset named `{0}`")]
    UnknownPreset(String),
    /// The index is past the end of the registry.
    #[error("preset index {index} is out of range ({len} presets registered)")]
    PresetIndexOutOfRange { index: usize, len: usize },
    /// A preset with this name (ignoring ASCII case) already exists.
    #[error("a preset named `{0}` is already registered")]
    DuplicatePreset(String),
    /// Width or height is below 2.
    #[error("texture size {width}x{height} is too small, both sides must be at least 2")]
    TooSmall { width: usize, height: usize },
}
