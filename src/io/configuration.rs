//! Skin geometry constants and runtime defaults

// Skin geometry
/// Width and height every processed skin must have
pub const SKIN_SIZE: u32 = 64;
/// Width of the head rectangle kept in head-only mode
pub const HEAD_WIDTH: u32 = 32;
/// Height of the head rectangle kept in head-only mode
pub const HEAD_HEIGHT: u32 = 16;

// Input and output settings
/// Extension of accepted input files (compared case-insensitively)
pub const INPUT_EXTENSION: &str = "png";
/// Directory beside the executable used when no output directory is given
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "edited";

// Notification texts
/// Title of error notifications
pub const ERROR_TITLE: &str = "Error";
/// Title of the terminal success notification
pub const DONE_TITLE: &str = "Done";
/// Body of the terminal success notification
pub const DONE_MESSAGE: &str = "Processing complete";

// Progress bar display settings
/// Width of the batch progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
