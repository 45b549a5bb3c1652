use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of one full inhale/hold/exhale/rest cycle in seconds.
pub const CYCLE_SECS: u32 = 4 + 4 + 6 + 2;

/// One of the four fixed breathing stages, in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

/// How the breathing circle should animate while a phase is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Expand,
    Steady,
    Contract,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Inhale, Phase::Hold, Phase::Exhale, Phase::Rest];
    pub const COUNT: usize = Self::ALL.len();

    /// Phase at `index`, wrapping around the cycle.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    pub fn index(self) -> usize {
        match self {
            Phase::Inhale => 0,
            Phase::Hold => 1,
            Phase::Exhale => 2,
            Phase::Rest => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Nominal duration in whole seconds. Never zero.
    pub const fn duration_secs(self) -> u32 {
        match self {
            Phase::Inhale => 4,
            Phase::Hold => 4,
            Phase::Exhale => 6,
            Phase::Rest => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::Hold => "Hold",
            Phase::Exhale => "Exhale",
            Phase::Rest => "Rest",
        }
    }

    /// Instructional text shown under the countdown.
    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe in slowly",
            Phase::Hold => "Hold your breath",
            Phase::Exhale => "Breathe out slowly",
            Phase::Rest => "Pause",
        }
    }

    pub fn animation(self) -> Animation {
        match self {
            Phase::Inhale => Animation::Expand,
            Phase::Exhale => Animation::Contract,
            Phase::Hold | Phase::Rest => Animation::Steady,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
