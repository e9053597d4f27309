//! Keyboard mapping shared by the frontends.
//!
//! Keys are named like DOM `KeyboardEvent.key` values; the native frontend
//! translates its key events into the same names.

use crate::input::{Command, Direction, DirectionSet, TickInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Move(Direction),
    Boost,
    Command(Command),
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Control::Move(Direction::Left)),
        "ArrowRight" | "d" | "D" => Some(Control::Move(Direction::Right)),
        "ArrowUp" | "w" | "W" => Some(Control::Move(Direction::Up)),
        "ArrowDown" | "s" | "S" => Some(Control::Move(Direction::Down)),
        "Shift" => Some(Control::Boost),
        "h" | "H" => Some(Control::Command(Command::ToggleHelp)),
        "r" | "R" => Some(Control::Command(Command::Reset)),
        _ => None,
    }
}

/// Arrow keys and letter keys are tracked separately so releasing one of two
/// keys bound to the same direction keeps the direction held.
#[inline]
fn source_bit(key: &str, dir: Direction) -> u8 {
    let arrow = key.starts_with("Arrow");
    let slot = Direction::ALL.iter().position(|d| *d == dir).unwrap_or(0) as u8;
    1 << (slot * 2 + arrow as u8)
}

/// Currently held movement keys, sampled into a [`TickInput`] every tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldControls {
    sources: u8,
    boost: bool,
}

impl HeldControls {
    /// Record a key press. Commands fire once per press and are returned to the caller.
    pub fn key_down(&mut self, key: &str) -> Option<Command> {
        match control_for_key(key)? {
            Control::Move(dir) => {
                self.sources |= source_bit(key, dir);
                None
            }
            Control::Boost => {
                self.boost = true;
                None
            }
            Control::Command(cmd) => Some(cmd),
        }
    }

    pub fn key_up(&mut self, key: &str) {
        match control_for_key(key) {
            Some(Control::Move(dir)) => self.sources &= !source_bit(key, dir),
            Some(Control::Boost) => self.boost = false,
            _ => {}
        }
    }

    /// Forget everything, e.g. when the window loses focus and key-ups go missing.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn directions(&self) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| self.sources & (0b11u8 << (i * 2)) != 0)
            .map(|(_, d)| d)
            .collect()
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            directions: self.directions(),
            boost: self.boost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_arrows_and_wasd() {
        assert_eq!(
            control_for_key("ArrowLeft"),
            Some(Control::Move(Direction::Left))
        );
        assert_eq!(control_for_key("a"), Some(Control::Move(Direction::Left)));
        assert_eq!(control_for_key("W"), Some(Control::Move(Direction::Up)));
        assert_eq!(control_for_key("s"), Some(Control::Move(Direction::Down)));
        assert_eq!(control_for_key("D"), Some(Control::Move(Direction::Right)));
        assert_eq!(control_for_key("q"), None);
    }

    #[test]
    fn maps_commands() {
        assert_eq!(
            control_for_key("h"),
            Some(Control::Command(Command::ToggleHelp))
        );
        assert_eq!(control_for_key("R"), Some(Control::Command(Command::Reset)));
    }

    #[test]
    fn two_keys_for_one_direction() {
        let mut held = HeldControls::default();
        held.key_down("a");
        held.key_down("ArrowLeft");
        held.key_up("ArrowLeft");
        assert!(held.directions().contains(Direction::Left));
        held.key_up("A"); // shift changes the reported letter case
        assert!(held.directions().is_empty());
    }

    #[test]
    fn commands_are_not_held() {
        let mut held = HeldControls::default();
        assert_eq!(held.key_down("r"), Some(Command::Reset));
        assert_eq!(held.tick_input(), TickInput::idle());
    }

    #[test]
    fn boost_and_clear() {
        let mut held = HeldControls::default();
        held.key_down("Shift");
        held.key_down("ArrowUp");
        let input = held.tick_input();
        assert!(input.boost);
        assert!(input.directions.contains(Direction::Up));
        held.clear();
        assert_eq!(held.tick_input(), TickInput::idle());
    }
}
