//! Line protocol for the `folio-sim` harness.
//!
//! One command per line, whitespace separated:
//!
//! ```text
//! left | right                 arrow keys
//! step <delta>                 direct navigation
//! drag-start
//! drag <dx>                    drag end with displacement
//! wheel <dx> <dy> [shift]
//! select <index>
//! slot <far-left|left|center|right|far-right>
//! hover <on|off>
//! motion <reduce|full>
//! wait <ms>
//! show
//! quit
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::carousel::{CarouselInput, Key, Slot, WheelInput};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimCommand {
    Input(CarouselInput),
    Wait(Duration),
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{command}': cannot parse '{value}' as {expected}")]
    InvalidArgument {
        command: &'static str,
        value: String,
        expected: &'static str,
    },
}

pub fn parse_command(line: &str) -> Result<SimCommand, CommandParseError> {
    let mut parts = line.split_whitespace();
    let head = parts.next().ok_or(CommandParseError::Empty)?;

    let command = match head.to_ascii_lowercase().as_str() {
        "left" => SimCommand::Input(CarouselInput::Key(Key::ArrowLeft)),
        "right" => SimCommand::Input(CarouselInput::Key(Key::ArrowRight)),
        "step" => SimCommand::Input(CarouselInput::Navigate(number(
            "step",
            parts.next(),
            "an integer delta",
        )?)),
        "drag-start" => SimCommand::Input(CarouselInput::DragStart),
        "drag" => SimCommand::Input(CarouselInput::DragEnd(number(
            "drag",
            parts.next(),
            "a displacement",
        )?)),
        "wheel" => {
            let delta_x = number("wheel", parts.next(), "<dx> <dy>")?;
            let delta_y = number("wheel", parts.next(), "<dx> <dy>")?;
            let modifier = matches!(parts.next(), Some("shift"));
            SimCommand::Input(CarouselInput::Wheel(WheelInput {
                delta_x,
                delta_y,
                modifier,
            }))
        }
        "select" => SimCommand::Input(CarouselInput::Select(number(
            "select",
            parts.next(),
            "an item index",
        )?)),
        "slot" => SimCommand::Input(CarouselInput::SelectSlot(slot(parts.next())?)),
        "hover" => match parts.next() {
            Some("on") => SimCommand::Input(CarouselInput::HoverEnter),
            Some("off") => SimCommand::Input(CarouselInput::HoverLeave),
            other => return Err(invalid("hover", other, "on|off")),
        },
        "motion" => match parts.next() {
            Some("reduce") => SimCommand::Input(CarouselInput::ReducedMotion(true)),
            Some("full") => SimCommand::Input(CarouselInput::ReducedMotion(false)),
            other => return Err(invalid("motion", other, "reduce|full")),
        },
        "wait" => SimCommand::Wait(Duration::from_millis(number(
            "wait",
            parts.next(),
            "milliseconds",
        )?)),
        "show" => SimCommand::Show,
        "quit" | "exit" => SimCommand::Quit,
        other => return Err(CommandParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn number<N: std::str::FromStr>(
    command: &'static str,
    raw: Option<&str>,
    expected: &'static str,
) -> Result<N, CommandParseError> {
    let raw = raw.ok_or(CommandParseError::MissingArgument { command, expected })?;
    raw.parse().map_err(|_| CommandParseError::InvalidArgument {
        command,
        value: raw.to_string(),
        expected,
    })
}

fn slot(raw: Option<&str>) -> Result<Slot, CommandParseError> {
    match raw {
        Some("far-left") => Ok(Slot::FarLeft),
        Some("left") => Ok(Slot::Left),
        Some("center") => Ok(Slot::Center),
        Some("right") => Ok(Slot::Right),
        Some("far-right") => Ok(Slot::FarRight),
        other => Err(invalid("slot", other, "far-left|left|center|right|far-right")),
    }
}

fn invalid(
    command: &'static str,
    raw: Option<&str>,
    expected: &'static str,
) -> CommandParseError {
    match raw {
        Some(value) => CommandParseError::InvalidArgument {
            command,
            value: value.to_string(),
            expected,
        },
        None => CommandParseError::MissingArgument { command, expected },
    }
}
