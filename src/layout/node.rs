// src/layout/node.rs
//! Rendering-session graph elements.

use serde::Serialize;

use crate::model::{Person, RelationKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A person placed in the simulation.
///
/// `x`/`y` stay `None` until the simulation seeds them. `fx`/`fy` pin the node:
/// while set, each tick snaps the position to them and zeroes the velocity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub person: Person,
    pub generation: i32,
    pub depth: i32,
    pub root: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub vx: f64,
    pub vy: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
}

impl TreeNode {
    #[must_use]
    pub fn new(person: Person) -> Self {
        Self {
            id: person.id.clone(),
            person,
            generation: 0,
            depth: 0,
            root: false,
            x: None,
            y: None,
            vx: 0.0,
            vy: 0.0,
            fx: None,
            fy: None,
        }
    }

    /// Current position; the origin before seeding.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.unwrap_or_default(), self.y.unwrap_or_default())
    }

    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.fx.is_some() || self.fy.is_some()
    }
}

/// Edge category used for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Source is the parent, target the child.
    Parent,
    Spouse,
    Sibling,
    Other,
}

/// A link endpoint: the raw person id until the simulation resolves it to a
/// node position in its node list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LinkEnd {
    Id(String),
    Node(usize),
}

impl LinkEnd {
    #[must_use]
    pub fn node(&self) -> Option<usize> {
        match self {
            Self::Node(i) => Some(*i),
            Self::Id(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeLink {
    pub id: String,
    pub source: LinkEnd,
    pub target: LinkEnd,
    pub kind: LinkKind,
    /// Type as stored on the relationship.
    pub relation: RelationKind,
}

impl TreeLink {
    /// Both endpoints, once resolved.
    #[must_use]
    pub fn ends(&self) -> Option<(usize, usize)> {
        Some((self.source.node()?, self.target.node()?))
    }
}
