// iconsmith - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Colours and emblem geometry are fixed design constants, not configuration.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "iconsmith";

/// Application identifier used for the platform config directory.
pub const APP_ID: &str = "iconsmith";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Output layout
// =============================================================================

/// Android resource root, relative to the project directory.
pub const DEFAULT_RES_DIR: &str = "app/src/main/res";

/// File name of the square launcher icon inside each density folder.
pub const SQUARE_ICON_FILE: &str = "ic_launcher.png";

/// File name of the circular launcher icon inside each density folder.
pub const ROUND_ICON_FILE: &str = "ic_launcher_round.png";

/// Mipmap density folders and the launcher icon size (px) each one implies.
pub const DENSITY_TABLE: &[(&str, u32)] = &[
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Smallest canvas the renderer accepts.
pub const MIN_ICON_SIZE: u32 = 1;

/// Largest canvas the renderer accepts (guards against runaway allocations).
pub const MAX_ICON_SIZE: u32 = 4_096;

// =============================================================================
// Inspector
// =============================================================================

/// Image the inspector opens when no path is given.
pub const DEFAULT_INSPECT_PATH: &str = "app/src/main/res/mipmap-xxhdpi/ic_launcher.png";

/// Spot-check coordinates sampled by default.
///
/// These were tuned against a 144 px render. On any other size they may
/// land on a different part of the emblem, or outside the image entirely.
pub const DEFAULT_SAMPLE_POINTS: &[(u32, u32)] =
    &[(10, 70), (60, 40), (72, 100), (70, 60), (30, 100)];

/// Canvas size the default sample points were chosen for.
pub const REFERENCE_SAMPLE_SIZE: u32 = 144;

/// Upper bound on user-supplied `--point` arguments.
pub const MAX_SAMPLE_POINTS: usize = 64;

// =============================================================================
// Palette (RGBA)
// =============================================================================

/// Canvas fill and inner cutout colour (deep navy).
pub const BACKGROUND: [u8; 4] = [25, 28, 47, 255];

/// Shield colour.
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Accent bar colour (amber).
pub const ACCENT: [u8; 4] = [255, 179, 0, 255];

/// Flame colour. Partially transparent: blended over what lies beneath.
pub const HIGHLIGHT: [u8; 4] = [255, 236, 179, 160];

/// Colour of the canvas the round variant is composited onto.
pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

// =============================================================================
// Emblem geometry (fractions of the canvas side)
// =============================================================================

/// Outer shield outline, 7 vertices, single closed contour.
pub const SHIELD_OUTLINE: &[(f64, f64)] = &[
    (0.50, 0.18),
    (0.82, 0.85),
    (0.68, 0.85),
    (0.58, 0.65),
    (0.42, 0.65),
    (0.32, 0.85),
    (0.18, 0.85),
];

/// Silhouette cut into the shield in the background colour.
pub const INNER_CUTOUT: &[(f64, f64)] = &[
    (0.50, 0.32),
    (0.62, 0.82),
    (0.55, 0.82),
    (0.50, 0.66),
    (0.45, 0.82),
    (0.38, 0.82),
];

/// Accent bar as (left, top, right, bottom).
pub const ACCENT_BAR: (f64, f64, f64, f64) = (0.36, 0.63, 0.64, 0.71);

/// Flame triangle.
pub const FLAME: &[(f64, f64)] = &[(0.50, 0.22), (0.58, 0.38), (0.42, 0.38)];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
