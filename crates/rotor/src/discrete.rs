//! Discrete selector dial: a fixed set of labels placed around a full circle.

use crate::angle::{FULL_TURN, angular_distance, normalize_degrees, pointer_angle_clockwise};
use crate::error::{ConfigError, RotaryError};
use crate::geometry::Point;
use crate::session::DragSession;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Hand-tuned position for one label, replacing its even-spacing slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngleOverride {
    pub label: Label,
    #[serde(alias = "degrees")]
    pub angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub labels: Vec<Label>,
    #[serde(default)]
    pub angle_overrides: Vec<AngleOverride>,
}

impl SelectionConfig {
    pub fn evenly_spaced<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            angle_overrides: Vec::new(),
        }
    }

    pub fn with_angle(mut self, label: impl Into<Label>, angle: f64) -> Self {
        self.angle_overrides.push(AngleOverride {
            label: label.into(),
            angle,
        });
        self
    }

    /// One angle per label, in declaration order, each in `[0, 360)`.
    pub fn resolve_angles(&self) -> Result<Vec<f64>, ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::EmptyLabels);
        }

        let mut seen = HashSet::new();
        if let Some(dup) = self.labels.iter().find(|l| !seen.insert(*l)) {
            return Err(ConfigError::DuplicateLabel(dup.clone()));
        }

        let spacing = FULL_TURN / self.labels.len() as f64;
        let mut angles: Vec<f64> = (0..self.labels.len())
            .map(|i| i as f64 * spacing)
            .collect();

        let mut overridden = HashSet::new();
        for o in &self.angle_overrides {
            if !o.angle.is_finite() {
                return Err(ConfigError::NonFinite("angle override"));
            }
            let idx = self
                .labels
                .iter()
                .position(|l| *l == o.label)
                .ok_or_else(|| ConfigError::UnknownOverride(o.label.clone()))?;
            if !overridden.insert(idx) {
                return Err(ConfigError::DuplicateOverride(o.label.clone()));
            }
            angles[idx] = normalize_degrees(o.angle);
        }

        Ok(angles)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorCommand {
    Next,
    Previous,
    JumpToFirst,
    JumpToLast,
    JumpToLabel(Label),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteRotary {
    labels: Vec<Label>,
    angles: Vec<f64>,
}

impl DiscreteRotary {
    pub fn new(config: SelectionConfig) -> Result<Self, ConfigError> {
        let angles = config.resolve_angles()?;
        Ok(Self {
            labels: config.labels,
            angles,
        })
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Labels with their resting angles, for placing them around the rotor.
    pub fn angles(&self) -> impl Iterator<Item = (&Label, f64)> {
        self.labels.iter().zip(self.angles.iter().copied())
    }

    fn index_of(&self, label: &Label) -> Result<usize, RotaryError> {
        self.labels
            .iter()
            .position(|l| l == label)
            .ok_or_else(|| RotaryError::InvalidLabel(label.clone()))
    }

    /// Resting rotation of `label`. An unknown label is a runtime
    /// `RotaryError::InvalidLabel` rather than a `ConfigError`, like the
    /// other label lookups.
    pub fn rotation_for_label(&self, label: &Label) -> Result<f64, RotaryError> {
        self.index_of(label).map(|i| self.angles[i])
    }

    fn nearest_index(&self, rotation: f64) -> usize {
        // min_by keeps the first of equal elements, so ties go to declaration order
        (0..self.labels.len())
            .min_by(|&a, &b| {
                angular_distance(rotation, self.angles[a])
                    .total_cmp(&angular_distance(rotation, self.angles[b]))
            })
            .unwrap_or(0)
    }

    pub fn label_for_rotation(&self, rotation: f64) -> &Label {
        &self.labels[self.nearest_index(rotation)]
    }

    /// Unsnapped rotation while dragging.
    pub fn apply_pointer_move(
        &self,
        screen_point: Point,
        session: &DragSession,
        center: Point,
    ) -> f64 {
        session.rotation_at(pointer_angle_clockwise(center, screen_point))
    }

    /// Nearest label to `rotation` and the angle the rotor should rest at.
    pub fn commit_drag(&self, rotation: f64) -> (Label, f64) {
        let i = self.nearest_index(rotation);
        (self.labels[i].clone(), self.angles[i])
    }

    /// `Next` and `Previous` walk declaration order and wrap, whatever the
    /// angles are.
    pub fn apply_key_command(
        &self,
        command: &SelectorCommand,
        current: &Label,
    ) -> Result<Label, RotaryError> {
        let count = self.labels.len();
        let index = match command {
            SelectorCommand::Next => (self.index_of(current)? + 1) % count,
            SelectorCommand::Previous => (self.index_of(current)? + count - 1) % count,
            SelectorCommand::JumpToFirst => 0,
            SelectorCommand::JumpToLast => count - 1,
            SelectorCommand::JumpToLabel(target) => self.index_of(target)?,
        };
        Ok(self.labels[index].clone())
    }

    pub fn apply_direct_select(&self, label: &Label) -> Result<Label, RotaryError> {
        self.index_of(label).map(|i| self.labels[i].clone())
    }
}
