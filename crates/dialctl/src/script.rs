//! Line-oriented event scripts: one input event per line, replayed through a
//! dial the same way a UI would feed it.

use rotor::{Bounds, HitArea, InputEvent, Key, Label, Outcome, Point, Rotary, RotorInput};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString, IntoEnumIterator};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Bounds,
    Down,
    Move,
    Up,
    Cancel,
    Key,
    Wheel,
    Select,
}

impl Verb {
    fn arity(self) -> usize {
        match self {
            Self::Bounds => 4,
            Self::Down | Self::Move | Self::Up => 2,
            Self::Cancel => 0,
            Self::Key | Self::Wheel | Self::Select => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    SetBounds(Bounds),
    Event(ScriptEvent),
}

/// An event whose pointer positions still need the current bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Cancel,
    Key(Key),
    Wheel(f64),
    Select(Label),
}

impl ScriptEvent {
    fn into_input(self, bounds: Bounds) -> InputEvent {
        match self {
            Self::Down(point) => InputEvent::PointerDown { point, bounds },
            Self::Move(point) => InputEvent::PointerMove { point, bounds },
            Self::Up(point) => InputEvent::PointerUp { point, bounds },
            Self::Cancel => InputEvent::PointerCancel,
            Self::Key(key) => InputEvent::Key(key.command()),
            Self::Wheel(delta_y) => InputEvent::Wheel { delta_y },
            Self::Select(label) => InputEvent::DirectSelect(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown event '{word}'")]
    UnknownEvent { line: usize, word: String },
    #[error("line {line}: {verb} takes {expected} argument(s), got {got}")]
    Arity {
        line: usize,
        verb: String,
        expected: usize,
        got: usize,
    },
    #[error("line {line}: '{value}' is not a number")]
    Number { line: usize, value: String },
    #[error("line {line}: unknown key '{name}' (expected one of {known})")]
    UnknownKey {
        line: usize,
        name: String,
        known: String,
    },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn number(line: usize, value: &str) -> Result<f64, ScriptError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::Number {
            line,
            value: value.to_string(),
        })
}

/// Parses one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Step>, ScriptError> {
    let text = text.split('#').next().unwrap_or_default().trim();
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };

    let verb = Verb::from_str(first).map_err(|_| ScriptError::UnknownEvent {
        line,
        word: first.to_string(),
    })?;
    let args: Vec<&str> = words.collect();
    if args.len() != verb.arity() {
        return Err(ScriptError::Arity {
            line,
            verb: verb.to_string(),
            expected: verb.arity(),
            got: args.len(),
        });
    }

    let point = || -> Result<Point, ScriptError> {
        Ok(Point::new(number(line, args[0])?, number(line, args[1])?))
    };

    let step = match verb {
        Verb::Bounds => Step::SetBounds(Bounds::new(
            number(line, args[0])?,
            number(line, args[1])?,
            number(line, args[2])?,
            number(line, args[3])?,
        )),
        Verb::Down => Step::Event(ScriptEvent::Down(point()?)),
        Verb::Move => Step::Event(ScriptEvent::Move(point()?)),
        Verb::Up => Step::Event(ScriptEvent::Up(point()?)),
        Verb::Cancel => Step::Event(ScriptEvent::Cancel),
        Verb::Key => {
            let key = Key::from_str(args[0]).map_err(|_| ScriptError::UnknownKey {
                line,
                name: args[0].to_string(),
                known: Key::iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", "),
            })?;
            Step::Event(ScriptEvent::Key(key))
        }
        Verb::Wheel => Step::Event(ScriptEvent::Wheel(number(line, args[0])?)),
        Verb::Select => Step::Event(ScriptEvent::Select(Label::from(args[0]))),
    };
    Ok(Some(step))
}

/// Feeds every line of `reader` through `rotary`, starting from `current`,
/// and writes one line per outcome to `out`. Pointer events are ignored
/// until a `bounds` line gives the control a size. Returns the final value.
pub fn replay<R, B, W, F>(
    rotary: R,
    mut current: R::Value,
    hit_area: HitArea,
    reader: B,
    out: &mut W,
    format_value: F,
) -> Result<R::Value, ReplayError>
where
    R: Rotary,
    B: BufRead,
    W: Write,
    F: Fn(&R::Value) -> String,
{
    let mut input = RotorInput::new(rotary).with_hit_area(hit_area);
    let mut bounds = Bounds::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let event = match parse_line(line_no, &line?)? {
            None => continue,
            Some(Step::SetBounds(b)) => {
                bounds = b;
                continue;
            }
            Some(Step::Event(event)) => event.into_input(bounds),
        };

        match input.handle(&event, &current) {
            Outcome::Ignored => writeln!(out, "{line_no}: ignored")?,
            Outcome::Preview { rotation, value } => writeln!(
                out,
                "{line_no}: preview {} at {rotation:.1}",
                format_value(&value)
            )?,
            Outcome::Committed { value, rotation } => {
                writeln!(
                    out,
                    "{line_no}: commit {} at {rotation:.1}",
                    format_value(&value)
                )?;
                current = value;
            }
            Outcome::Rejected(e) => writeln!(out, "{line_no}: rejected: {e}")?,
        }
    }

    Ok(current)
}
