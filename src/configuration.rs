//! Describes a batch of calculations that can be loaded from a YAML file.
//!
//! ```yaml
//! atomic_number: 1
//! max_n: 5
//! transitions:
//!   - n_initial: 3
//!     n_final: 2
//! ```
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use crate::energy::{self, EnergyLevel, DEFAULT_ATOMIC_NUMBER};
use crate::error::{require_positive, BohrResult};
use crate::radius;
use crate::summary::{LevelSummary, DEFAULT_MAX_N};
use crate::transition::{Photon, Transition};

/// A transition requested in a configuration. The atomic number comes from the enclosing
/// [BohrConfiguration].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRequest {
    pub n_initial: u32,
    pub n_final: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BohrConfiguration {
    /// Nuclear charge of the hydrogen-like atom.
    #[serde(default = "default_atomic_number")]
    pub atomic_number: u32,

    /// Highest level tabulated in the energy and radius summaries.
    #[serde(default = "default_max_n")]
    pub max_n: u32,

    #[serde(default)]
    pub transitions: Vec<TransitionRequest>,
}

fn default_atomic_number() -> u32 {
    DEFAULT_ATOMIC_NUMBER
}
fn default_max_n() -> u32 {
    DEFAULT_MAX_N
}

/// Per default, hydrogen tabulated up to `n = 5`, with no transitions.
impl Default for BohrConfiguration {
    fn default() -> Self {
        BohrConfiguration {
            atomic_number: DEFAULT_ATOMIC_NUMBER,
            max_n: DEFAULT_MAX_N,
            transitions: Vec::new(),
        }
    }
}

/// Everything a [BohrConfiguration] asks for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub atomic_number: u32,
    pub energies: LevelSummary<EnergyLevel>,
    pub radii: LevelSummary<f64>,
    pub photons: Vec<(Transition, Photon)>,
}

impl BohrConfiguration {
    pub fn from_yaml_str(contents: &str) -> BohrResult<Self> {
        let config: BohrConfiguration = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> BohrResult<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config = Self::from_yaml_str(&contents)?;
        log::debug!(
            "loaded configuration from {}: Z={}, max_n={}, {} transitions",
            path.as_ref().display(),
            config.atomic_number,
            config.max_n,
            config.transitions.len()
        );
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> BohrResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks every quantum number and the atomic number are at least one.
    pub fn validate(&self) -> BohrResult<()> {
        require_positive("Z", self.atomic_number)?;
        require_positive("max_n", self.max_n)?;
        for request in self.transitions.iter() {
            require_positive("n_initial", request.n_initial)?;
            require_positive("n_final", request.n_final)?;
        }
        Ok(())
    }

    /// Runs the requested calculations.
    pub fn evaluate(&self) -> BohrResult<Report> {
        self.validate()?;
        let z = self.atomic_number;
        let photons = self
            .transitions
            .iter()
            .map(|request| {
                let transition = Transition::new(request.n_initial, request.n_final, z);
                Ok((transition, transition.photon()?))
            })
            .collect::<BohrResult<Vec<_>>>()?;
        Ok(Report {
            atomic_number: z,
            energies: energy::summary(z, self.max_n)?,
            radii: radius::summary(z, self.max_n)?,
            photons,
        })
    }
}

impl Report {
    pub fn to_json(&self) -> BohrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
