pub const DEFAULT_SAMPLE_RATE: f64 = 1e6;

// sc16 full scale
pub const SC16_FULL_SCALE: f64 = i16::MAX as f64;

pub const PLOT_FOLDER: &str = "plots";
pub const PLOT_FILE: &str = "iq-time.png";
pub const PLOT_SIZE_X: u32 = 1200;
pub const PLOT_SIZE_Y: u32 = 600;
pub const PLOT_FONT_SIZE: u32 = 22;

pub const PLOT_TITLE: &str = "I/Q components over time";
pub const PLOT_X_LABEL: &str = "Time (s)";
pub const PLOT_Y_LABEL: &str = "I/Q Amplitude";
pub const PLOT_I_LABEL: &str = "I";
pub const PLOT_Q_LABEL: &str = "Q";
