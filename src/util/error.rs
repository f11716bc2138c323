// iconsmith - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Nothing here is caught or retried: every error travels up to `main`,
// which prints the chain and exits non-zero.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all iconsmith operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IconError {
    /// Rendering or writing an icon failed.
    Render(RenderError),

    /// Reading or sampling an existing icon failed.
    Inspect(InspectError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Render error: {e}"),
            Self::Inspect(e) => write!(f, "Inspect error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Inspect(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while drawing icons or persisting them.
#[derive(Debug)]
pub enum RenderError {
    /// Canvas size is zero or above the allowed maximum.
    InvalidSize { size: u32, min: u32, max: u32 },

    /// The density folder does not exist. It is never created on demand.
    DestinationMissing { path: PathBuf },

    /// A mask's dimensions do not match the image it is applied to.
    MaskMismatch {
        image: (u32, u32),
        mask: (u32, u32),
    },

    /// PNG encoding failed.
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Writing the encoded file failed.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, min, max } => {
                write!(f, "Icon size {size} is out of range ({min}-{max})")
            }
            Self::DestinationMissing { path } => write!(
                f,
                "Destination folder '{}' does not exist",
                path.display()
            ),
            Self::MaskMismatch { image, mask } => write!(
                f,
                "Mask is {}x{} but image is {}x{}",
                mask.0, mask.1, image.0, image.1
            ),
            Self::Encode { path, source } => {
                write!(f, "Failed to encode PNG '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Failed to write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RenderError> for IconError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Inspect errors
// ---------------------------------------------------------------------------

/// Errors raised while reading and sampling an existing image.
#[derive(Debug)]
pub enum InspectError {
    /// The image path does not exist.
    NotFound { path: PathBuf },

    /// The file exists but could not be decoded as an image.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// A sample coordinate lies outside the image.
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A `--point` argument is not of the form `X,Y`.
    InvalidPoint { raw: String },

    /// More sample points were requested than allowed.
    TooManyPoints { count: usize, max: usize },

    /// I/O error reading the image.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "Image '{}' does not exist", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Failed to decode '{}': {source}", path.display())
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Sample point ({x}, {y}) is outside the {width}x{height} image"
            ),
            Self::InvalidPoint { raw } => {
                write!(f, "Invalid sample point '{raw}', expected X,Y")
            }
            Self::TooManyPoints { count, max } => {
                write!(f, "{count} sample points requested, maximum is {max}")
            }
            Self::Io { path, source } => {
                write!(f, "I/O error reading '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<InspectError> for IconError {
    fn from(e: InspectError) -> Self {
        Self::Inspect(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for IconError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for iconsmith results.
pub type Result<T> = std::result::Result<T, IconError>;
