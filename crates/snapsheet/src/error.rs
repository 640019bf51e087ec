#[derive(Debug, Clone, PartialEq)]
pub enum SheetConfigError {
    InvalidSnapPoint { index: usize, value: f32 },
    InvalidRubberBandFactor(f32),
    InvalidVelocityThreshold(f32),
}

impl std::fmt::Display for SheetConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetConfigError::InvalidSnapPoint { index, value } => {
                write!(f, "snap point {index} is {value}; expected a finite height >= 0")
            }
            SheetConfigError::InvalidRubberBandFactor(factor) => {
                write!(f, "rubber band factor {factor} must be finite and >= 0")
            }
            SheetConfigError::InvalidVelocityThreshold(threshold) => {
                write!(f, "velocity threshold {threshold} must be finite and > 0")
            }
        }
    }
}

impl std::error::Error for SheetConfigError {}
