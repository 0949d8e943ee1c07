//! Continuous-range dial: a bounded, stepped number laid out over a partial
//! sweep.

use crate::angle::{FULL_TURN, is_within_arc, normalize_degrees, pointer_angle_clockwise};
use crate::error::ConfigError;
use crate::geometry::Point;
use crate::session::DragSession;
use serde::{Deserialize, Serialize};
use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(alias = "sweep")]
    pub sweep_degrees: f64,
    /// Where `min` sits; `max` sits at `start_angle_degrees + sweep_degrees`.
    #[serde(alias = "start")]
    pub start_angle_degrees: f64,
    /// Overrides the page size used by `PageUp`/`PageDown`.
    #[serde(default)]
    pub page_step: Option<f64>,
}

impl RangeConfig {
    pub fn new(min: f64, max: f64, step: f64, sweep_degrees: f64, start_angle_degrees: f64) -> Self {
        Self {
            min,
            max,
            step,
            sweep_degrees,
            start_angle_degrees,
            page_step: None,
        }
    }

    pub fn with_page_step(mut self, page_step: f64) -> Self {
        self.page_step = Some(page_step);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
            ("sweep_degrees", self.sweep_degrees),
            ("start_angle_degrees", self.start_angle_degrees),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(*name));
        }

        if self.min >= self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.sweep_degrees <= 0.0 || self.sweep_degrees > FULL_TURN {
            return Err(ConfigError::InvalidSweep(self.sweep_degrees));
        }
        if let Some(page) = self.page_step
            && !(page.is_finite() && page > 0.0)
        {
            return Err(ConfigError::InvalidPageStep(page));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum RangeCommand {
    StepUp,
    StepDown,
    PageUp,
    PageDown,
    JumpToMin,
    JumpToMax,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinuousRotary {
    config: RangeConfig,
}

impl ContinuousRotary {
    pub fn new(config: RangeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Page size: the configured one, else the larger of five steps and a
    /// tenth of the range.
    pub fn page_step(&self) -> f64 {
        let RangeConfig { min, max, step, .. } = self.config;
        self.config
            .page_step
            .unwrap_or_else(|| (step * 5.0).max((max - min) / 10.0))
    }

    /// Snaps `value` onto the step grid anchored at `min`, within range.
    pub fn quantize(&self, value: f64) -> f64 {
        let RangeConfig { min, max, step, .. } = self.config;
        // f64::round rounds half away from zero
        let steps = ((value.clamp(min, max) - min) / step).round();
        (steps * step + min).clamp(min, max)
    }

    pub fn angle_for_value(&self, value: f64) -> f64 {
        let RangeConfig {
            min,
            max,
            sweep_degrees,
            start_angle_degrees,
            ..
        } = self.config;
        let fraction = (value.clamp(min, max) - min) / (max - min);
        start_angle_degrees + fraction * sweep_degrees
    }

    /// Offset of `angle` along the sweep, in `[0, sweep]`. Angles in the
    /// dead zone go to the nearer endpoint; an exact tie goes to `min`.
    fn sweep_offset(&self, angle: f64) -> f64 {
        let sweep = self.config.sweep_degrees;
        let direct = angle - self.config.start_angle_degrees;
        if (0.0..=sweep).contains(&direct) {
            return direct;
        }

        let offset = normalize_degrees(direct);
        if is_within_arc(angle, self.config.start_angle_degrees, sweep) {
            return offset;
        }

        let past_end = offset - sweep;
        let before_start = FULL_TURN - offset;
        if past_end < before_start { sweep } else { 0.0 }
    }

    /// Arc-clamped rotation in the sweep's own frame
    /// (`start..=start + sweep`), unquantized.
    pub fn clamp_to_sweep(&self, angle: f64) -> f64 {
        self.config.start_angle_degrees + self.sweep_offset(angle)
    }

    pub fn value_for_angle(&self, angle: f64) -> f64 {
        let RangeConfig {
            min,
            max,
            sweep_degrees,
            ..
        } = self.config;
        let raw = min + self.sweep_offset(angle) / sweep_degrees * (max - min);
        self.quantize(raw)
    }

    pub fn apply_pointer_move(
        &self,
        screen_point: Point,
        session: &DragSession,
        center: Point,
    ) -> f64 {
        let pointer = pointer_angle_clockwise(center, screen_point);
        self.value_for_angle(session.unwrapped_rotation_at(pointer))
    }

    /// Applies a keyboard command. Results are clamped and quantized; a
    /// command that cannot move the value returns it unchanged.
    pub fn apply_key_command(&self, command: RangeCommand, current: f64) -> f64 {
        let RangeConfig { min, max, step, .. } = self.config;
        let target = match command {
            RangeCommand::StepUp => current + step,
            RangeCommand::StepDown => current - step,
            RangeCommand::PageUp => current + self.page_step(),
            RangeCommand::PageDown => current - self.page_step(),
            RangeCommand::JumpToMin => min,
            RangeCommand::JumpToMax => max,
        };

        let next = self.quantize(target);
        if next == current {
            log::trace!("{command} leaves value at {current}");
            return current;
        }
        next
    }
}
