use thiserror::Error;

/// Errors raised by the calculators and the configuration loader.
#[derive(Error, Debug)]
pub enum BohrError {
    /// A quantum number or atomic number was below one.
    #[error("Invalid argument: {argument} must be >= 1, got {value}")]
    InvalidArgument { argument: &'static str, value: u32 },

    /// An argument did not exceed the lower bound its context requires.
    #[error("Invalid argument: {argument} must be > {bound}, got {value}")]
    BelowBound {
        argument: &'static str,
        bound: u32,
        value: u32,
    },

    /// Frequency or wavelength was requested for a transition from a level to itself.
    #[error("Degenerate transition: initial and final level are both n={level}")]
    DegenerateTransition { level: u32 },

    /// The configuration YAML could not be parsed or written.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A report could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type returned throughout the crate.
pub type BohrResult<T> = Result<T, BohrError>;

/// Rejects a quantum number or atomic number below one.
pub(crate) fn require_positive(argument: &'static str, value: u32) -> BohrResult<()> {
    if value < 1 {
        return Err(BohrError::InvalidArgument { argument, value });
    }
    Ok(())
}

/// Rejects a value that does not exceed `bound`.
pub(crate) fn require_above(argument: &'static str, bound: u32, value: u32) -> BohrResult<()> {
    if value <= bound {
        return Err(BohrError::BelowBound {
            argument,
            bound,
            value,
        });
    }
    Ok(())
}
