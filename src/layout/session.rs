// src/layout/session.rs
//! Interaction state for one tree view: drag, zoom, selection, hover.
//!
//! Pointer coordinates arriving here are already in simulation space; use
//! [`Viewport::to_world`] to convert screen events first.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::dates::life_span_label;
use crate::model::Person;

use super::forces::ForceParams;
use super::graph::TreeGraph;
use super::node::Point;
use super::palette::{link_color, node_color};
use super::simulation::{Cooling, Simulation};
use super::viewport::{Transform, Viewport};

pub const NODE_RADIUS: f64 = 20.0;
pub const HOVER_RADIUS: f64 = 25.0;

/// Discrete input applied to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    DragStart(String),
    Drag { id: String, to: Point },
    DragEnd(String),
    Pin { id: String, at: Point },
    Unpin(String),
    SetTransform { scale: f64, translate: Point },
    ZoomIn,
    ZoomOut,
    Center,
    ClickNode(String),
    ClickBackground,
    Hover(String),
    HoverEnd,
    Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: &'static str,
    pub label: String,
    pub years: String,
    pub selected: bool,
    pub root: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderLink {
    pub id: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: &'static str,
}

/// Everything a renderer needs for one paint, in simulation space plus the
/// transform to apply to the whole scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub transform: Transform,
    pub zoom_percent: i64,
    pub nodes: Vec<RenderNode>,
    pub links: Vec<RenderLink>,
}

#[derive(Debug, Clone)]
pub struct TreeSession {
    sim: Simulation,
    viewport: Viewport,
    drag_alpha_target: f64,
    reference_year: i32,
    selected: Option<String>,
    hovered: Option<String>,
    /// Nodes under a pointer; several pointers may drag at once.
    dragging: BTreeSet<String>,
}

impl TreeSession {
    /// Builds the simulation for `graph` on a `width` x `height` canvas.
    #[must_use]
    pub fn new(graph: TreeGraph, config: &LayoutConfig, width: f64, height: f64, reference_year: i32) -> Self {
        let params = ForceParams::from_config(config, width, height);
        Self {
            sim: Simulation::new(graph, params, Cooling::from_config(config)),
            viewport: Viewport::new(width, height, config.min_zoom, config.max_zoom),
            drag_alpha_target: config.drag_alpha_target,
            reference_year,
            selected: None,
            hovered: None,
            dragging: BTreeSet::new(),
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::DragStart(id) => self.on_drag_start(&id),
            Command::Drag { id, to } => self.on_drag(&id, to),
            Command::DragEnd(id) => self.on_drag_end(&id),
            Command::Pin { id, at } => {
                self.sim.pin(&id, at);
            }
            Command::Unpin(id) => {
                self.sim.unpin(&id);
            }
            Command::SetTransform { scale, translate } => {
                self.viewport.set_transform(scale, translate.x, translate.y);
            }
            Command::ZoomIn => self.viewport.zoom_in(),
            Command::ZoomOut => self.viewport.zoom_out(),
            Command::Center => self.viewport.center(),
            Command::ClickNode(id) => {
                self.on_node_click(&id);
            }
            Command::ClickBackground => self.on_background_click(),
            Command::Hover(id) => self.on_hover(&id),
            Command::HoverEnd => self.hovered = None,
            Command::Tick => {
                self.sim.tick();
            }
        }
    }

    /// Pins the node where it is and reheats the simulation.
    pub fn on_drag_start(&mut self, id: &str) {
        let Some(at) = self.sim.node(id).map(super::node::TreeNode::position) else {
            return;
        };
        if self.dragging.is_empty() {
            self.sim.set_alpha_target(self.drag_alpha_target);
            self.sim.restart();
        }
        self.sim.pin(id, at);
        self.dragging.insert(id.to_string());
    }

    /// Moves the pin to the pointer.
    pub fn on_drag(&mut self, id: &str, to: Point) {
        if self.dragging.contains(id) {
            self.sim.pin(id, to);
        }
    }

    /// Releases the pin. Once no node is dragged, the simulation cools back
    /// to rest.
    pub fn on_drag_end(&mut self, id: &str) {
        self.sim.unpin(id);
        self.dragging.remove(id);
        if self.dragging.is_empty() {
            self.sim.set_alpha_target(0.0);
        }
    }

    /// Selects the node; returns its person for the detail panel.
    pub fn on_node_click(&mut self, id: &str) -> Option<&Person> {
        self.sim.node(id)?;
        self.selected = Some(id.to_string());
        self.selected_person()
    }

    pub fn on_background_click(&mut self) {
        self.selected = None;
    }

    pub fn on_hover(&mut self, id: &str) {
        if self.sim.node(id).is_some() {
            self.hovered = Some(id.to_string());
        }
    }

    pub fn on_zoom(&mut self, transform: Transform) {
        self.viewport.set_transform(transform.k, transform.x, transform.y);
    }

    /// Host tick callback. Returns whether the layout moved.
    pub fn tick(&mut self) -> bool {
        self.sim.tick()
    }

    /// Stops the simulation and drops transient UI state.
    pub fn dismantle(&mut self) {
        self.sim.stop();
        self.dragging.clear();
        self.hovered = None;
        self.selected = None;
    }

    #[must_use]
    pub fn selected_person(&self) -> Option<&Person> {
        let id = self.selected.as_deref()?;
        self.sim.node(id).map(|n| &n.person)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Ids currently being dragged, in id order.
    pub fn dragging(&self) -> impl Iterator<Item = &str> {
        self.dragging.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_dragging(&self, id: &str) -> bool {
        self.dragging.contains(id)
    }

    /// Visual radius only; the collision radius is unaffected.
    #[must_use]
    pub fn node_radius(&self, id: &str) -> f64 {
        if self.hovered.as_deref() == Some(id) {
            HOVER_RADIUS
        } else {
            NODE_RADIUS
        }
    }

    #[must_use]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn simulation_mut(&mut self) -> &mut Simulation {
        &mut self.sim
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        let nodes = self
            .sim
            .nodes()
            .iter()
            .map(|n| {
                let p = n.position();
                RenderNode {
                    id: n.id.clone(),
                    x: p.x,
                    y: p.y,
                    radius: self.node_radius(&n.id),
                    fill: node_color(&n.person, self.reference_year).hex(),
                    label: n.person.display_name(),
                    years: life_span_label(
                        n.person.birth_date.as_deref(),
                        n.person.death_date.as_deref(),
                    ),
                    selected: self.selected.as_deref() == Some(n.id.as_str()),
                    root: n.root,
                }
            })
            .collect();

        let links = self
            .sim
            .segments()
            .into_iter()
            .map(|s| RenderLink {
                id: s.id,
                x1: s.from.x,
                y1: s.from.y,
                x2: s.to.x,
                y2: s.to.y,
                stroke: link_color(s.kind).hex(),
            })
            .collect();

        Scene {
            transform: self.viewport.transform(),
            zoom_percent: self.viewport.zoom_percent(),
            nodes,
            links,
        }
    }
}

impl Drop for TreeSession {
    fn drop(&mut self) {
        self.sim.stop();
    }
}
