// src/layout/mod.rs
//! Force-directed family tree layout.
//!
//! [`build_graph`] turns people and relationships into unresolved nodes and
//! links; [`run_layout`] resolves them into a [`Simulation`] that the host
//! ticks; [`TreeSession`] layers drag, zoom and selection on top.

pub mod forces;
pub mod graph;
pub mod node;
pub mod palette;
pub mod session;
pub mod simulation;
pub mod viewport;

pub use forces::{advance, ForceParams, Spring};
pub use graph::{build_graph, people_for_tree, TreeGraph};
pub use node::{LinkEnd, LinkKind, Point, TreeLink, TreeNode};
pub use palette::{link_color, node_color, Color};
pub use session::{Command, Scene, TreeSession};
pub use simulation::{Cooling, Frame, Frames, LinkSegment, NodePosition, Simulation};
pub use viewport::{Transform, Viewport};

use crate::config::LayoutConfig;

/// Canvas dimensions in simulation units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self::new(config.width, config.height)
    }
}

/// Starts a simulation for `graph`, centered on the canvas.
#[must_use]
pub fn run_layout(graph: TreeGraph, canvas: CanvasSize, config: &LayoutConfig) -> Simulation {
    let params = ForceParams::from_config(config, canvas.width, canvas.height);
    Simulation::new(graph, params, Cooling::from_config(config))
}
