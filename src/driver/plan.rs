//! Which representation and rounding pairs a run evaluates, and in what order.
//!
//! A plan comes either from command line arguments or from a YAML file:
//!
//! ```yaml
//! skip_blank_lines: false
//! combinations:
//!   - representation: narrow
//!   - representation: extended
//!     round_to: 3
//! ```

use crate::precision::Representation;
use crate::preprocessing::loader::LoadOptions;
use crate::preprocessing::rounding::RoundingPolicy;
use anyhow::{ensure, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Decimal places of the rounded pass in the default plan.
pub const DEFAULT_ROUNDING_PLACES: u32 = 3;

/// One precision and rounding pair to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub representation: Representation,
    #[serde(default, rename = "round_to")]
    pub rounding: RoundingPolicy,
}

impl Combination {
    pub fn new(representation: Representation, rounding: RoundingPolicy) -> Self {
        Self {
            representation,
            rounding,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rounding.decimal_places() {
            Some(_) => write!(f, "{} ({})", self.representation, self.rounding),
            None => write!(f, "{}", self.representation),
        }
    }
}

/// Ordered list of combinations evaluated against one source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunPlan {
    #[serde(default)]
    pub skip_blank_lines: bool,
    pub combinations: Vec<Combination>,
}

impl Default for RunPlan {
    /// Every representation unrounded, then every representation rounded to
    /// three decimal places.
    fn default() -> Self {
        Self::from_args(&Representation::ALL, &[DEFAULT_ROUNDING_PLACES], false)
    }
}

impl RunPlan {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading run plan {}", path_ref.display()))?;
        let plan: RunPlan = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing run plan {}", path_ref.display()))?;
        ensure!(
            !plan.combinations.is_empty(),
            "run plan {} lists no combinations",
            path_ref.display()
        );
        Ok(plan)
    }

    /// Builds the unrounded pass followed by one pass per entry of
    /// `rounding_places`, each over `representations` in the given order.
    /// An empty `representations` slice means all of them.
    pub fn from_args(
        representations: &[Representation],
        rounding_places: &[u32],
        skip_blank_lines: bool,
    ) -> Self {
        let representations: &[Representation] = if representations.is_empty() {
            &Representation::ALL
        } else {
            representations
        };
        let policies = std::iter::once(RoundingPolicy::NONE)
            .chain(rounding_places.iter().copied().map(RoundingPolicy::places));
        let combinations = policies
            .flat_map(|rounding| {
                representations
                    .iter()
                    .map(move |&representation| Combination::new(representation, rounding))
            })
            .collect();
        Self {
            skip_blank_lines,
            combinations,
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            skip_blank_lines: self.skip_blank_lines,
        }
    }
}
