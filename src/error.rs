//! Error type shared by the simulation, settings and driver.

/// Contract violations at construction time plus settings I/O failures.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Rect with a non-positive or non-finite size
    InvalidRect { width: f32, height: f32 },
    /// Animation clip with no frames
    EmptyClip,
    /// Frame duration must be positive and finite
    InvalidFrameDuration(f32),
    /// Animation cursor past the end of its clip
    FrameOutOfRange { frame: usize, len: usize },
    /// Patrol interval with end before start
    InvalidPatrol { start: f32, end: f32 },
    /// Timestep must be finite and non-negative
    InvalidTimestep(f32),
    /// File I/O error
    Io(String),
    /// Settings (de)serialization error
    Settings(String),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::InvalidRect { width, height } => {
                write!(f, "Invalid rect size: {}x{}", width, height)
            }
            SimError::EmptyClip => write!(f, "Animation clip has no frames"),
            SimError::InvalidFrameDuration(d) => write!(f, "Invalid frame duration: {}", d),
            SimError::FrameOutOfRange { frame, len } => {
                write!(f, "Animation frame {} out of range for {} frames", frame, len)
            }
            SimError::InvalidPatrol { start, end } => {
                write!(f, "Invalid patrol bounds: {} .. {}", start, end)
            }
            SimError::InvalidTimestep(dt) => write!(f, "Invalid timestep: {}", dt),
            SimError::Io(msg) => write!(f, "I/O error: {}", msg),
            SimError::Settings(msg) => write!(f, "Settings error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Settings(e.to_string())
    }
}
