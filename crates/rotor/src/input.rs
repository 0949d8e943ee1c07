//! Input adapter: turns pointer, key, wheel and direct-select events into
//! dial operations and tracks the drag gesture for one control.

use crate::continuous::{ContinuousRotary, RangeCommand};
use crate::discrete::{DiscreteRotary, Label, SelectorCommand};
use crate::error::RotaryError;
use crate::geometry::{Bounds, Point};
use crate::session::DragSession;
use serde_with::DeserializeFromStr;
use std::fmt;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum Extreme {
    First,
    Last,
}

/// Logical keyboard command, independent of which key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Step(Direction),
    Page(Direction),
    Extreme(Extreme),
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    #[strum(to_string = "ArrowUp", serialize = "up", serialize = "+")]
    ArrowUp,
    #[strum(to_string = "ArrowRight", serialize = "right")]
    ArrowRight,
    #[strum(to_string = "ArrowDown", serialize = "down", serialize = "-")]
    ArrowDown,
    #[strum(to_string = "ArrowLeft", serialize = "left")]
    ArrowLeft,
    #[strum(to_string = "PageUp", serialize = "pgup")]
    PageUp,
    #[strum(to_string = "PageDown", serialize = "pgdn")]
    PageDown,
    Home,
    End,
}

impl Key {
    pub fn command(self) -> Command {
        match self {
            Self::ArrowUp | Self::ArrowRight => Command::Step(Direction::Forward),
            Self::ArrowDown | Self::ArrowLeft => Command::Step(Direction::Backward),
            Self::PageUp => Command::Page(Direction::Forward),
            Self::PageDown => Command::Page(Direction::Backward),
            Self::Home => Command::Extreme(Extreme::First),
            Self::End => Command::Extreme(Extreme::Last),
        }
    }
}

/// The seam between the input adapter and a concrete dial.
pub trait Rotary {
    type Value: Clone + PartialEq + fmt::Debug;

    /// Resting rotation of the rotor for `value`.
    fn rotation_for(&self, value: &Self::Value) -> Result<f64, RotaryError>;

    /// Intermediate rotation while the pointer is at `pointer_angle`.
    fn drag_rotation(&self, session: &DragSession, pointer_angle: f64) -> f64;

    /// Value to report alongside an intermediate rotation.
    fn drag_value(&self, rotation: f64, current: &Self::Value) -> Self::Value;

    /// Value chosen when a drag ends at `rotation`, and the rotation the rotor
    /// should come to rest at.
    fn commit(&self, rotation: f64) -> (Self::Value, f64);

    fn apply_command(
        &self,
        command: Command,
        current: &Self::Value,
    ) -> Result<Self::Value, RotaryError>;

    fn jump_to_item(
        &self,
        _current: &Self::Value,
        label: &Label,
    ) -> Result<Self::Value, RotaryError> {
        Err(RotaryError::InvalidLabel(label.clone()))
    }
}

impl Rotary for ContinuousRotary {
    type Value = f64;

    fn rotation_for(&self, value: &f64) -> Result<f64, RotaryError> {
        Ok(self.angle_for_value(*value))
    }

    fn drag_rotation(&self, session: &DragSession, pointer_angle: f64) -> f64 {
        self.clamp_to_sweep(session.unwrapped_rotation_at(pointer_angle))
    }

    fn drag_value(&self, rotation: f64, _current: &f64) -> f64 {
        self.value_for_angle(rotation)
    }

    fn commit(&self, rotation: f64) -> (f64, f64) {
        let value = self.value_for_angle(rotation);
        (value, self.angle_for_value(value))
    }

    fn apply_command(&self, command: Command, current: &f64) -> Result<f64, RotaryError> {
        let command = match command {
            Command::Step(Direction::Forward) => RangeCommand::StepUp,
            Command::Step(Direction::Backward) => RangeCommand::StepDown,
            Command::Page(Direction::Forward) => RangeCommand::PageUp,
            Command::Page(Direction::Backward) => RangeCommand::PageDown,
            Command::Extreme(Extreme::First) => RangeCommand::JumpToMin,
            Command::Extreme(Extreme::Last) => RangeCommand::JumpToMax,
        };
        Ok(self.apply_key_command(command, *current))
    }
}

impl Rotary for DiscreteRotary {
    type Value = Label;

    fn rotation_for(&self, value: &Label) -> Result<f64, RotaryError> {
        self.rotation_for_label(value)
    }

    fn drag_rotation(&self, session: &DragSession, pointer_angle: f64) -> f64 {
        session.rotation_at(pointer_angle)
    }

    fn drag_value(&self, _rotation: f64, current: &Label) -> Label {
        current.clone()
    }

    fn commit(&self, rotation: f64) -> (Label, f64) {
        self.commit_drag(rotation)
    }

    fn apply_command(&self, command: Command, current: &Label) -> Result<Label, RotaryError> {
        let command = match command {
            Command::Step(Direction::Forward) | Command::Page(Direction::Forward) => {
                SelectorCommand::Next
            }
            Command::Step(Direction::Backward) | Command::Page(Direction::Backward) => {
                SelectorCommand::Previous
            }
            Command::Extreme(Extreme::First) => SelectorCommand::JumpToFirst,
            Command::Extreme(Extreme::Last) => SelectorCommand::JumpToLast,
        };
        self.apply_key_command(&command, current)
    }

    fn jump_to_item(&self, _current: &Label, label: &Label) -> Result<Label, RotaryError> {
        self.apply_direct_select(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { point: Point, bounds: Bounds },
    PointerMove { point: Point, bounds: Bounds },
    PointerUp { point: Point, bounds: Bounds },
    PointerCancel,
    Key(Command),
    /// Negative `delta_y` (scrolling up) steps forward.
    Wheel { delta_y: f64 },
    DirectSelect(Label),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<V> {
    /// Nothing changed.
    Ignored,
    /// Drag in progress; `rotation` is unsnapped.
    Preview { rotation: f64, value: V },
    /// New resting value and rotation.
    Committed { value: V, rotation: f64 },
    /// The request named something the dial does not have; value unchanged.
    Rejected(RotaryError),
}

/// Region of the control where a pointer-down starts a drag: the circle
/// inscribed in the bounds, minus an optional dead zone around the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    /// Dead zone radius as a fraction of the inscribed radius.
    pub inner_ratio: f64,
}

impl Default for HitArea {
    fn default() -> Self {
        Self { inner_ratio: 0.0 }
    }
}

impl HitArea {
    pub fn contains(&self, bounds: &Bounds, point: Point) -> bool {
        let (Some(center), Some(radius)) = (bounds.center(), bounds.radius()) else {
            return false;
        };
        let dist = center.distance_to(point);
        dist <= radius && dist >= radius * self.inner_ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        session: DragSession,
        /// Last intermediate rotation, committed if release has no position.
        rotation: f64,
    },
}

/// Drag lifecycle for one control. The caller keeps the current value and
/// passes it in with every event; this only holds the gesture in flight.
#[derive(Debug, Clone)]
pub struct RotorInput<R> {
    rotary: R,
    hit_area: HitArea,
    state: DragState,
}

impl<R: Rotary> RotorInput<R> {
    pub fn new(rotary: R) -> Self {
        Self {
            rotary,
            hit_area: HitArea::default(),
            state: DragState::Idle,
        }
    }

    pub fn with_hit_area(mut self, hit_area: HitArea) -> Self {
        self.hit_area = hit_area;
        self
    }

    pub fn rotary(&self) -> &R {
        &self.rotary
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn handle(&mut self, event: &InputEvent, current: &R::Value) -> Outcome<R::Value> {
        match event {
            InputEvent::PointerDown { point, bounds } => self.begin_drag(*point, bounds, current),
            InputEvent::PointerMove { point, bounds } => self.drag_to(*point, bounds, current),
            InputEvent::PointerUp { point, bounds } => self.end_drag(Some((*point, bounds))),
            InputEvent::PointerCancel => self.end_drag(None),
            InputEvent::Key(command) => self.command(*command, current),
            InputEvent::Wheel { delta_y } => self.wheel(*delta_y, current),
            InputEvent::DirectSelect(label) => self.jump_to_item(label, current),
        }
    }

    fn begin_drag(
        &mut self,
        point: Point,
        bounds: &Bounds,
        current: &R::Value,
    ) -> Outcome<R::Value> {
        if self.is_dragging() {
            log::debug!("pointer-down ignored: drag already in progress");
            return Outcome::Ignored;
        }
        if !self.hit_area.contains(bounds, point) {
            log::debug!("pointer-down at ({}, {}) outside hit area", point.x, point.y);
            return Outcome::Ignored;
        }

        let anchor = match bounds.angle_of(point) {
            Ok(angle) => angle,
            Err(e) => {
                log::debug!("pointer-down skipped: {}", e);
                return Outcome::Ignored;
            }
        };
        let base = match self.rotary.rotation_for(current) {
            Ok(rotation) => rotation,
            Err(e) => return Outcome::Rejected(e),
        };

        let session = DragSession::new(anchor, base);
        let rotation = self.rotary.drag_rotation(&session, anchor);
        self.state = DragState::Dragging { session, rotation };
        log::debug!("drag started at {:.1}° from rotation {:.1}°", anchor, base);

        Outcome::Preview {
            rotation,
            value: current.clone(),
        }
    }

    fn drag_to(
        &mut self,
        point: Point,
        bounds: &Bounds,
        current: &R::Value,
    ) -> Outcome<R::Value> {
        let DragState::Dragging { session, .. } = self.state else {
            return Outcome::Ignored;
        };

        // no hit test here: the drag keeps tracking once the pointer leaves the control
        let pointer = match bounds.angle_of(point) {
            Ok(angle) => angle,
            Err(e) => {
                log::debug!("pointer-move skipped: {}", e);
                return Outcome::Ignored;
            }
        };

        let rotation = self.rotary.drag_rotation(&session, pointer);
        self.state = DragState::Dragging { session, rotation };
        log::trace!("drag at {:.1}°", rotation);

        Outcome::Preview {
            rotation,
            value: self.rotary.drag_value(rotation, current),
        }
    }

    /// Pointer-up and pointer-cancel both commit; cancel has no position and
    /// commits the last intermediate rotation.
    fn end_drag(&mut self, release: Option<(Point, &Bounds)>) -> Outcome<R::Value> {
        let DragState::Dragging { session, rotation } = std::mem::take(&mut self.state) else {
            log::debug!("pointer release without an active drag");
            return Outcome::Ignored;
        };

        let rotation = release
            .and_then(|(point, bounds)| bounds.angle_of(point).ok())
            .map_or(rotation, |pointer| {
                self.rotary.drag_rotation(&session, pointer)
            });

        let (value, rotation) = self.rotary.commit(rotation);
        log::debug!("drag committed {:?} at {:.1}°", value, rotation);
        Outcome::Committed { value, rotation }
    }

    fn command(&self, command: Command, current: &R::Value) -> Outcome<R::Value> {
        if self.is_dragging() {
            log::debug!("{:?} ignored during drag", command);
            return Outcome::Ignored;
        }
        self.settle(self.rotary.apply_command(command, current))
    }

    fn wheel(&self, delta_y: f64, current: &R::Value) -> Outcome<R::Value> {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return Outcome::Ignored;
        }
        let direction = if delta_y < 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.command(Command::Step(direction), current)
    }

    fn jump_to_item(&self, label: &Label, current: &R::Value) -> Outcome<R::Value> {
        if self.is_dragging() {
            log::debug!("select '{}' ignored during drag", label);
            return Outcome::Ignored;
        }
        self.settle(self.rotary.jump_to_item(current, label))
    }

    fn settle(&self, result: Result<R::Value, RotaryError>) -> Outcome<R::Value> {
        let resolved = result.and_then(|value| {
            self.rotary
                .rotation_for(&value)
                .map(|rotation| (value, rotation))
        });
        match resolved {
            Ok((value, rotation)) => Outcome::Committed { value, rotation },
            Err(e) => {
                log::debug!("rejected: {}", e);
                Outcome::Rejected(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::point_on_circle;
    use crate::continuous::RangeConfig;
    use crate::discrete::SelectionConfig;
    use std::str::FromStr;

    const BOUNDS: Bounds = Bounds {
        x: 0.0,
        y: 0.0,
        width: 200.0,
        height: 200.0,
    };

    fn at(degrees: f64) -> Point {
        point_on_circle(Point::new(100.0, 100.0), 80.0, degrees)
    }

    fn down(degrees: f64) -> InputEvent {
        InputEvent::PointerDown {
            point: at(degrees),
            bounds: BOUNDS,
        }
    }

    fn drag(degrees: f64) -> InputEvent {
        InputEvent::PointerMove {
            point: at(degrees),
            bounds: BOUNDS,
        }
    }

    fn up(degrees: f64) -> InputEvent {
        InputEvent::PointerUp {
            point: at(degrees),
            bounds: BOUNDS,
        }
    }

    fn modes() -> RotorInput<DiscreteRotary> {
        let dial =
            DiscreteRotary::new(SelectionConfig::evenly_spaced(["AUTO", "P", "A", "S", "M"]))
                .unwrap();
        RotorInput::new(dial)
    }

    fn zoom() -> RotorInput<ContinuousRotary> {
        let dial = ContinuousRotary::new(RangeConfig::new(1.0, 5.0, 0.1, 270.0, -135.0)).unwrap();
        RotorInput::new(dial)
    }

    fn label(s: &str) -> Label {
        Label::from(s)
    }

    fn committed<V: Clone + std::fmt::Debug>(outcome: &Outcome<V>) -> (V, f64) {
        match outcome {
            Outcome::Committed { value, rotation } => (value.clone(), *rotation),
            other => panic!("expected commit, got {other:?}"),
        }
    }

    fn preview<V: Clone + std::fmt::Debug>(outcome: &Outcome<V>) -> (V, f64) {
        match outcome {
            Outcome::Preview { value, rotation } => (value.clone(), *rotation),
            other => panic!("expected preview, got {other:?}"),
        }
    }

    #[test]
    fn test_key_parsing() {
        let cases = [
            ("ArrowUp", Key::ArrowUp),
            ("arrowup", Key::ArrowUp),
            ("up", Key::ArrowUp),
            ("+", Key::ArrowUp),
            ("PAGEDOWN", Key::PageDown),
            ("pgdn", Key::PageDown),
            ("home", Key::Home),
            ("End", Key::End),
        ];
        for (name, expected) in cases {
            assert_eq!(Key::from_str(name).unwrap(), expected, "{name}");
        }
        assert!(Key::from_str("Tab").is_err());
        assert_eq!(Key::PageUp.to_string(), "PageUp");
    }

    #[test]
    fn test_key_deserialization() {
        let key: Key = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(key, Key::ArrowLeft);
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(Key::ArrowRight.command(), Command::Step(Direction::Forward));
        assert_eq!(Key::ArrowDown.command(), Command::Step(Direction::Backward));
        assert_eq!(Key::PageUp.command(), Command::Page(Direction::Forward));
        assert_eq!(Key::Home.command(), Command::Extreme(Extreme::First));
        assert_eq!(Key::End.command(), Command::Extreme(Extreme::Last));
    }

    #[test]
    fn test_hit_area() {
        let area = HitArea { inner_ratio: 0.25 };
        assert!(area.contains(&BOUNDS, Point::new(100.0, 10.0)));
        assert!(area.contains(&BOUNDS, Point::new(190.0, 100.0)));
        assert!(!area.contains(&BOUNDS, Point::new(5.0, 5.0)));
        assert!(!area.contains(&BOUNDS, Point::new(110.0, 100.0)));
        assert!(!area.contains(&Bounds::default(), Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_discrete_drag_commits_nearest_label() {
        let mut input = modes();
        let current = label("AUTO");

        let (value, rotation) = preview(&input.handle(&down(0.0), &current));
        assert_eq!(value, current);
        assert!(rotation.abs() < 1e-9 || (rotation - 360.0).abs() < 1e-9);
        assert!(input.is_dragging());

        let (value, rotation) = preview(&input.handle(&drag(90.0), &current));
        assert_eq!(value, current);
        assert!((rotation - 90.0).abs() < 1e-9);

        let (value, rotation) = committed(&input.handle(&up(90.0), &current));
        assert_eq!(value, label("P"));
        assert_eq!(rotation, 72.0);
        assert_eq!(input.state(), DragState::Idle);
    }

    #[test]
    fn test_drag_starts_relative_to_current_value() {
        let mut input = modes();
        let current = label("A");

        // grabbing the rotor anywhere does not move it
        let (_, rotation) = preview(&input.handle(&down(300.0), &current));
        assert!((rotation - 144.0).abs() < 1e-9);

        let (_, rotation) = preview(&input.handle(&drag(340.0), &current));
        assert!((rotation - 184.0).abs() < 1e-9);

        // back to the anchor, whatever the path
        input.handle(&drag(120.0), &current);
        let (value, _) = committed(&input.handle(&up(300.0), &current));
        assert_eq!(value, current);
    }

    #[test]
    fn test_pointer_capture_outside_bounds() {
        let mut input = modes();
        let current = label("AUTO");
        input.handle(&down(0.0), &current);

        let far_right = InputEvent::PointerMove {
            point: Point::new(900.0, 100.0),
            bounds: BOUNDS,
        };
        let (_, rotation) = preview(&input.handle(&far_right, &current));
        assert!((rotation - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_down_outside_hit_area_is_ignored() {
        let mut input = modes();
        let current = label("AUTO");
        let corner = InputEvent::PointerDown {
            point: Point::new(2.0, 2.0),
            bounds: BOUNDS,
        };
        assert_eq!(input.handle(&corner, &current), Outcome::Ignored);
        assert!(!input.is_dragging());
        assert_eq!(input.handle(&drag(90.0), &current), Outcome::Ignored);
    }

    #[test]
    fn test_cancel_commits_last_rotation() {
        let mut input = modes();
        let current = label("AUTO");
        input.handle(&down(0.0), &current);
        input.handle(&drag(200.0), &current);

        let (value, rotation) = committed(&input.handle(&InputEvent::PointerCancel, &current));
        assert_eq!(value, label("S"));
        assert_eq!(rotation, 216.0);
        assert!(!input.is_dragging());
    }

    #[test]
    fn test_release_without_session_is_ignored() {
        let mut input = modes();
        let current = label("P");
        assert_eq!(input.handle(&up(10.0), &current), Outcome::Ignored);
        assert_eq!(
            input.handle(&InputEvent::PointerCancel, &current),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_zero_size_layout_is_ignored() {
        let mut input = modes();
        let current = label("AUTO");
        let collapsed = Bounds::new(0.0, 0.0, 0.0, 0.0);

        let down_collapsed = InputEvent::PointerDown {
            point: Point::new(0.0, 0.0),
            bounds: collapsed,
        };
        assert_eq!(input.handle(&down_collapsed, &current), Outcome::Ignored);

        input.handle(&down(0.0), &current);
        input.handle(&drag(150.0), &current);
        let move_collapsed = InputEvent::PointerMove {
            point: Point::new(10.0, 10.0),
            bounds: collapsed,
        };
        assert_eq!(input.handle(&move_collapsed, &current), Outcome::Ignored);
        assert!(input.is_dragging());

        // release during reflow keeps the last known rotation
        let up_collapsed = InputEvent::PointerUp {
            point: Point::new(10.0, 10.0),
            bounds: collapsed,
        };
        let (value, _) = committed(&input.handle(&up_collapsed, &current));
        assert_eq!(value, label("A"));
    }

    #[test]
    fn test_pointer_on_center_is_ignored() {
        let mut input = modes();
        let current = label("AUTO");
        input.handle(&down(45.0), &current);
        let center = InputEvent::PointerMove {
            point: Point::new(100.0, 100.0),
            bounds: BOUNDS,
        };
        assert_eq!(input.handle(&center, &current), Outcome::Ignored);
        assert!(input.is_dragging());
    }

    #[test]
    fn test_non_finite_pointer_keeps_value() {
        let nan = Point::new(f64::NAN, 40.0);

        let mut input = modes();
        let current = label("S");
        input.handle(&down(30.0), &current);
        let moved = InputEvent::PointerMove {
            point: nan,
            bounds: BOUNDS,
        };
        assert_eq!(input.handle(&moved, &current), Outcome::Ignored);
        let (value, rotation) = committed(&input.handle(&InputEvent::PointerCancel, &current));
        assert_eq!(value, label("S"));
        assert_eq!(rotation, 216.0);

        let mut input = zoom();
        input.handle(&down(0.0), &4.0);
        assert_eq!(input.handle(&moved, &4.0), Outcome::Ignored);
        let released = InputEvent::PointerUp {
            point: nan,
            bounds: BOUNDS,
        };
        let (value, _) = committed(&input.handle(&released, &4.0));
        assert!((value - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut input = modes();
        let current = label("AUTO");
        input.handle(&down(0.0), &current);
        input.handle(&drag(72.0), &current);
        assert_eq!(input.handle(&down(200.0), &current), Outcome::Ignored);

        let (value, _) = committed(&input.handle(&InputEvent::PointerCancel, &current));
        assert_eq!(value, label("P"));
    }

    #[test]
    fn test_keys_and_selection_on_discrete() {
        let mut input = modes();
        let next = InputEvent::Key(Key::ArrowRight.command());
        let (value, rotation) = committed(&input.handle(&next, &label("M")));
        assert_eq!(value, label("AUTO"));
        assert_eq!(rotation, 0.0);

        let page_back = InputEvent::Key(Key::PageDown.command());
        let (value, _) = committed(&input.handle(&page_back, &label("AUTO")));
        assert_eq!(value, label("M"));

        let select = InputEvent::DirectSelect(label("S"));
        let (value, rotation) = committed(&input.handle(&select, &label("AUTO")));
        assert_eq!(value, label("S"));
        assert_eq!(rotation, 216.0);

        let bogus = InputEvent::DirectSelect(label("B"));
        assert_eq!(
            input.handle(&bogus, &label("AUTO")),
            Outcome::Rejected(RotaryError::InvalidLabel(label("B")))
        );
    }

    #[test]
    fn test_keys_ignored_during_drag() {
        let mut input = modes();
        let current = label("AUTO");
        input.handle(&down(0.0), &current);
        let next = InputEvent::Key(Command::Step(Direction::Forward));
        assert_eq!(input.handle(&next, &current), Outcome::Ignored);
        assert_eq!(
            input.handle(&InputEvent::DirectSelect(label("P")), &current),
            Outcome::Ignored
        );
        assert!(input.is_dragging());
    }

    #[test]
    fn test_wheel_steps() {
        let mut input = zoom();
        let (value, _) = committed(&input.handle(&InputEvent::Wheel { delta_y: -3.0 }, &3.0));
        assert!((value - 3.1).abs() < 1e-9);

        let (value, _) = committed(&input.handle(&InputEvent::Wheel { delta_y: 1.0 }, &3.0));
        assert!((value - 2.9).abs() < 1e-9);

        assert_eq!(
            input.handle(&InputEvent::Wheel { delta_y: 0.0 }, &3.0),
            Outcome::Ignored
        );
    }

    #[test]
    fn test_continuous_drag() {
        let mut input = zoom();
        let current = 3.0;

        let (value, rotation) = preview(&input.handle(&down(90.0), &current));
        assert_eq!(value, 3.0);
        assert!(rotation.abs() < 1e-9);

        // a quarter turn clockwise is a third of the range
        let (value, rotation) = preview(&input.handle(&drag(180.0), &current));
        assert!((rotation - 90.0).abs() < 1e-9);
        assert!((value - 4.3).abs() < 1e-9);

        // into the dead zone: held at max
        let (value, rotation) = preview(&input.handle(&drag(250.0), &current));
        assert_eq!(rotation, 135.0);
        assert_eq!(value, 5.0);

        let (value, rotation) = committed(&input.handle(&up(250.0), &current));
        assert_eq!(value, 5.0);
        assert_eq!(rotation, 135.0);
    }

    #[test]
    fn test_continuous_commit_snaps_to_step() {
        let mut input = zoom();
        input.handle(&down(0.0), &1.0);
        let (value, rotation) = committed(&input.handle(&up(40.0), &1.0));
        // 40° of 270° over a range of 4
        assert!((value - 1.6).abs() < 1e-9);
        assert!((rotation - input.rotary().angle_for_value(value)).abs() < 1e-9);
    }

    #[test]
    fn test_continuous_keys_and_selection() {
        let mut input = zoom();
        let end = InputEvent::Key(Key::End.command());
        let (value, rotation) = committed(&input.handle(&end, &2.0));
        assert_eq!(value, 5.0);
        assert_eq!(rotation, 135.0);

        let home = InputEvent::Key(Key::Home.command());
        let (value, _) = committed(&input.handle(&home, &2.0));
        assert_eq!(value, 1.0);

        assert_eq!(
            input.handle(&InputEvent::DirectSelect(label("AUTO")), &2.0),
            Outcome::Rejected(RotaryError::InvalidLabel(label("AUTO")))
        );
    }

    #[test]
    fn test_independent_controls() {
        let mut left = modes();
        let mut right = zoom();
        left.handle(&down(0.0), &label("AUTO"));
        assert!(left.is_dragging());
        assert!(!right.is_dragging());
        assert_eq!(right.handle(&up(90.0), &3.0), Outcome::Ignored);
        assert!(left.is_dragging());
    }
}
