use crate::Game2048Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum travel, in pixels, before a touch gesture counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Keyboard key name as sent by the browser (`ArrowLeft`, ...) or a WASD key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Touch gesture from start to end point. The dominant axis wins; ties go
    /// to the vertical axis. Anything shorter than [`SWIPE_THRESHOLD`] is not a swipe.
    pub fn from_swipe(dx: f64, dy: f64) -> Option<Self> {
        if dx.abs() > dy.abs() {
            if dx > SWIPE_THRESHOLD {
                Some(Direction::Right)
            } else if dx < -SWIPE_THRESHOLD {
                Some(Direction::Left)
            } else {
                None
            }
        } else if dy > SWIPE_THRESHOLD {
            Some(Direction::Down)
        } else if dy < -SWIPE_THRESHOLD {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Accepts a direction word or a key name. Unknown input yields `None`.
    pub fn parse_intent(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<Direction>()
            .ok()
            .or_else(|| Direction::from_key(trimmed))
    }
}

impl FromStr for Direction {
    type Err = Game2048Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            _ => Err(Game2048Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("w"), Some(Direction::Up));
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_from_swipe() {
        assert_eq!(Direction::from_swipe(50.0, 10.0), Some(Direction::Right));
        assert_eq!(Direction::from_swipe(-50.0, 10.0), Some(Direction::Left));
        assert_eq!(Direction::from_swipe(5.0, 40.0), Some(Direction::Down));
        assert_eq!(Direction::from_swipe(5.0, -40.0), Some(Direction::Up));
    }

    #[test]
    fn test_short_swipe_is_ignored() {
        assert_eq!(Direction::from_swipe(15.0, 3.0), None);
        assert_eq!(Direction::from_swipe(0.0, -20.0), None);
        assert_eq!(Direction::from_swipe(0.0, 0.0), None);
    }

    #[test]
    fn test_diagonal_swipe_goes_vertical() {
        assert_eq!(Direction::from_swipe(30.0, 30.0), Some(Direction::Down));
    }

    #[test]
    fn test_parse_intent() {
        assert_eq!(Direction::parse_intent("left"), Some(Direction::Left));
        assert_eq!(Direction::parse_intent(" DOWN "), Some(Direction::Down));
        assert_eq!(Direction::parse_intent("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::parse_intent("sideways"), None);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "diagonal".parse::<Direction>().unwrap_err();
        assert!(matches!(err, Game2048Error::UnknownDirection(ref s) if s == "diagonal"));
    }

    #[test]
    fn test_display_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
        }
    }
}
