//! Spacing tokens for theming

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::overlay::Overlay;
use crate::TokenError;

/// Steps of the default scale; each step is `step * 4px`
pub const DEFAULT_SPACING_STEPS: [u32; 19] = [
    0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24, 32, 40, 48, 56, 64, 96,
];

/// Spacing scale: step -> px
///
/// Serialized as a map with string keys (`"4" = 16`) so it round-trips through
/// TOML as well as JSON. A partial spacing scale is just a smaller scale; its
/// entries replace (or add) steps of the base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f32>", into = "BTreeMap<String, f32>")]
pub struct SpacingScale {
    steps: BTreeMap<u32, f32>,
}

impl SpacingScale {
    pub fn new() -> Self {
        Self {
            steps: BTreeMap::new(),
        }
    }

    /// Scale with the default steps at the given base unit
    pub fn with_base(base: f32) -> Self {
        DEFAULT_SPACING_STEPS
            .iter()
            .map(|&step| (step, step as f32 * base))
            .collect()
    }

    /// Get the px value for a step
    pub fn get(&self, step: u32) -> Option<f32> {
        self.steps.get(&step).copied()
    }

    pub fn insert(&mut self, step: u32, px: f32) -> Option<f32> {
        self.steps.insert(step, px)
    }

    pub fn with(mut self, step: u32, px: f32) -> Self {
        self.steps.insert(step, px);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.steps.iter().map(|(&step, &px)| (step, px))
    }
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self::with_base(4.0)
    }
}

impl FromIterator<(u32, f32)> for SpacingScale {
    fn from_iter<I: IntoIterator<Item = (u32, f32)>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl Overlay for SpacingScale {
    type Patch = SpacingScale;

    fn overlay(&mut self, patch: &SpacingScale) {
        for (step, px) in patch.iter() {
            self.steps.insert(step, px);
        }
    }
}

impl TryFrom<BTreeMap<String, f32>> for SpacingScale {
    type Error = TokenError;

    fn try_from(raw: BTreeMap<String, f32>) -> Result<Self, Self::Error> {
        raw.into_iter()
            .map(|(key, px)| {
                key.trim()
                    .parse::<u32>()
                    .map(|step| (step, px))
                    .map_err(|_| TokenError::InvalidSpacingStep(key))
            })
            .collect()
    }
}

impl From<SpacingScale> for BTreeMap<String, f32> {
    fn from(scale: SpacingScale) -> Self {
        scale
            .steps
            .into_iter()
            .map(|(step, px)| (step.to_string(), px))
            .collect()
    }
}
