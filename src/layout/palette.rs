// src/layout/palette.rs
//! Node and link colors.

use serde::Serialize;

use crate::dates::extract_year;
use crate::model::Person;

use super::node::LinkKind;

const CHILD_AGE: i32 = 18;
const ELDER_AGE: i32 = 65;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Orange,
    Gray,
}

impl Color {
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Self::Red => "#ef4444",
            Self::Green => "#22c55e",
            Self::Blue => "#3b82f6",
            Self::Orange => "#f59e0b",
            Self::Gray => "#6b7280",
        }
    }
}

/// Red if deceased; else by age from the birth year: green under 18, blue
/// under 65, orange otherwise; gray when no birth year is known.
#[must_use]
pub fn node_color(person: &Person, reference_year: i32) -> Color {
    if person.is_deceased() {
        return Color::Red;
    }
    match extract_year(person.birth_date.as_deref()) {
        Some(born) => match reference_year - born {
            age if age < CHILD_AGE => Color::Green,
            age if age < ELDER_AGE => Color::Blue,
            _ => Color::Orange,
        },
        None => Color::Gray,
    }
}

#[must_use]
pub fn link_color(kind: LinkKind) -> Color {
    match kind {
        LinkKind::Parent => Color::Blue,
        LinkKind::Spouse => Color::Red,
        LinkKind::Sibling => Color::Green,
        LinkKind::Other => Color::Gray,
    }
}
