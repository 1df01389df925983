use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    pub fn from_is_red(is_red: bool) -> Self {
        if is_red { Color::Red } else { Color::Yellow }
    }

    pub fn opponent(&self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Yellow => write!(f, "Yellow"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Color),
}

impl Slot {
    pub fn is_filled(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    pub fn is_red(&self) -> bool {
        *self == Slot::Occupied(Color::Red)
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(color) => Some(*color),
        }
    }

    pub fn symbol(&self) -> char {
        self.color().map_or('.', |color| color.symbol())
    }

    pub fn from_symbol(symbol: char) -> Option<Slot> {
        match symbol {
            '.' => Some(Slot::Empty),
            'R' => Some(Slot::Occupied(Color::Red)),
            'Y' => Some(Slot::Occupied(Color::Yellow)),
            _ => None,
        }
    }
}
