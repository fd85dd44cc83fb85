// Simulation tuning constants shared by the scene, overlays and tests.

// Clock
pub const TIME_STEP_SEC: f32 = 0.016; // nominal advance per display refresh

// Uniform ranges
pub const AUDIO_BASS_MAX: f32 = 0.5;
pub const DISPLACEMENT_STRENGTH: f32 = 0.1;

// Intro sequence
pub const ASSEMBLE_DELAY_SEC: f32 = 1.0; // Loading -> Assembling
pub const COMPLETE_DELAY_SEC: f32 = 1.0; // Assembling -> Complete
pub const GROW_DURATION_SEC: f32 = 2.0;
pub const INTRO_SCALE: f32 = 0.1; // mesh scale at mount
pub const DISPLAY_SCALE: f32 = 1.5; // full display size

// Click feedback pulse
pub const CLICK_SCALE: f32 = 2.0;
pub const CLICK_GROW_SEC: f32 = 0.5;
pub const CLICK_SETTLE_SEC: f32 = 0.4;

// Idle rotation
pub const SPIN_Y_RATE: f32 = 0.2;
pub const WOBBLE_X_FREQ: f32 = 0.3;
pub const WOBBLE_X_AMPLITUDE: f32 = 0.1;

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const COALESCE_RATE: f32 = 0.01; // fraction of the remaining delta per tick
pub const PARTICLE_COLUMN_SPAN: usize = 100;
pub const PARTICLE_ARM_X: f32 = 0.5;
pub const PARTICLE_SIZE_MIN: f32 = 0.05;
pub const PARTICLE_SIZE_SPAN: f32 = 0.1;
pub const PARTICLE_OPACITY: f32 = 0.8;

// Sprite field
pub const SPRITE_COUNT: usize = 50;
pub const SPRITE_SPIN_PER_TICK: f32 = 0.01;
pub const SPRITE_BOB_PER_TICK: f32 = 0.001;
pub const SPRITE_ENTRANCE_SCALE: f32 = 0.3;
pub const SPRITE_REST_SCALE: f32 = 0.2;
pub const SPRITE_ENTRANCE_DELAY_SEC: f32 = 1.0;
pub const SPRITE_ENTRANCE_SEC: f32 = 2.0;
pub const SPRITE_STAGGER_SEC: f32 = 0.05;

// Scatter volume for particles and sprites (half extents)
pub const SCATTER_XY: f32 = 2.0;
pub const SCATTER_Z: f32 = 1.0;

// Glow palette
pub const GLOW_RGB: [f32; 3] = [0.0, 1.0, 0.25];

// Spark overlay
pub const SPARK_RADIUS_PX: f32 = 200.0; // spawn zone around the overlay center
pub const SPARK_SPAWN_CHANCE: f32 = 0.3;
pub const SPARK_DECAY_PER_TICK: f32 = 0.02;
pub const SPARK_SPEED_MIN: f32 = 2.0;
pub const SPARK_SPEED_SPAN: f32 = 5.0;
pub const SPEED_LINE_COUNT: usize = 20;
pub const SPEED_LINE_GAP_PX: f32 = 10.0;

// Terminal overlay
pub const CARET_TOGGLE_FRAMES: u64 = 30;
pub const STATUS_REFRESH_SEC: f64 = 1.0;
pub const GLITCH_JITTER_PX: f32 = 2.0;

// Audio analysis
pub const FFT_SIZE: u32 = 256;
pub const BASS_BIN_COUNT: usize = 10;

// Camera
pub const CAMERA_HALF_HEIGHT: f32 = 2.0;
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Deterministic seed for textures and scatter layouts
pub const DEFAULT_SEED: u64 = 0x5161_1C0D;
