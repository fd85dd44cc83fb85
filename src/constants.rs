// Web-layer styling for the overlay surfaces and the canvas stack.
// Simulation tuning lives in `core::constants`.

// Terminal overlay
pub const TERMINAL_WASH: &str = "rgba(0, 0, 0, 0.3)";
pub const SCANLINE_COLOR: &str = "rgba(0, 255, 65, 0.1)";
pub const SCANLINE_SPACING_PX: f64 = 4.0;
pub const TERMINAL_FONT: &str = "14px \"IBM Plex Mono\", monospace";
pub const TERMINAL_TEXT_COLOR: &str = "#00ff41";
pub const TERMINAL_GLOW_BLUR: f64 = 10.0;
pub const TERMINAL_TEXT_X: f64 = 20.0;
pub const TERMINAL_TEXT_BOTTOM_OFFSET: f64 = 40.0; // baseline above the bottom edge
pub const GLITCH_COLOR: &str = "#ff1493";
pub const GLITCH_ALPHA: f64 = 0.3;

// Particle overlay
pub const SPEED_LINE_COLOR: &str = "rgba(0, 255, 65, 0.3)";
pub const SPEED_LINE_WIDTH: f64 = 1.0;
pub const SPARK_COLOR: &str = "#00ff41";
pub const SPARK_DOT_RADIUS_PX: f64 = 2.0;

// Canvas stack (bottom to top)
pub const GPU_CANVAS_Z: &str = "0";
pub const TERMINAL_CANVAS_Z: &str = "1";
pub const PARTICLE_CANVAS_Z: &str = "2";
