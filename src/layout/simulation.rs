// src/layout/simulation.rs
//! Alpha-cooled force simulation driven by host ticks.

use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::PI;

use crate::config::LayoutConfig;

use super::forces::{advance, ForceParams, Spring};
use super::graph::TreeGraph;
use super::node::{LinkEnd, LinkKind, Point, TreeLink, TreeNode};

const INITIAL_RADIUS: f64 = 10.0;

/// Cooling schedule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cooling {
    pub alpha_min: f64,
    pub alpha_decay: f64,
}

impl Cooling {
    #[must_use]
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            alpha_min: config.alpha_min,
            alpha_decay: config.alpha_decay,
        }
    }
}

/// One node's position in a frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

/// A link drawn between its endpoints' current positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkSegment {
    pub id: String,
    pub kind: LinkKind,
    pub from: Point,
    pub to: Point,
}

/// Snapshot emitted after each tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub alpha: f64,
    pub nodes: Vec<NodePosition>,
    pub links: Vec<LinkSegment>,
}

/// Live layout state for one rendering session.
///
/// The simulation starts hot (`alpha = 1`) and cools toward `alpha_target`;
/// once alpha falls below `alpha_min` it stops itself. [`Simulation::restart`]
/// resumes it, [`Simulation::stop`] halts it for good until restarted.
#[derive(Debug, Clone)]
pub struct Simulation {
    nodes: Vec<TreeNode>,
    links: Vec<TreeLink>,
    springs: Vec<Spring>,
    index: HashMap<String, usize>,
    params: ForceParams,
    cooling: Cooling,
    alpha: f64,
    alpha_target: f64,
    running: bool,
    ticks: u64,
}

impl Simulation {
    /// Resolves link endpoints to node positions and seeds unplaced nodes on a
    /// phyllotaxis spiral around the canvas center.
    ///
    /// Links naming a person outside the node set are dropped. An empty graph
    /// yields a simulation that is never running.
    #[must_use]
    pub fn new(graph: TreeGraph, params: ForceParams, cooling: Cooling) -> Self {
        let TreeGraph { mut nodes, links } = graph;
        let index: HashMap<String, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id.clone(), i)).collect();

        let links: Vec<TreeLink> = links
            .into_iter()
            .filter_map(|link| resolve(link, &index))
            .collect();
        let pairs: Vec<(usize, usize)> = links.iter().filter_map(TreeLink::ends).collect();
        let springs = Spring::from_pairs(&pairs, nodes.len());

        seed_positions(&mut nodes, params.center);
        let running = !nodes.is_empty();
        tracing::debug!(nodes = nodes.len(), links = links.len(), "simulation built");

        Self {
            nodes,
            links,
            springs,
            index,
            params,
            cooling,
            alpha: 1.0,
            alpha_target: 0.0,
            running,
            ticks: 0,
        }
    }

    /// Advances one step if running. Returns whether a step happened.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.alpha += (self.alpha_target - self.alpha) * self.cooling.alpha_decay;
        self.nodes = advance(&self.nodes, &self.springs, &self.params, self.alpha);
        self.ticks += 1;
        if self.alpha < self.cooling.alpha_min {
            self.running = false;
            tracing::debug!(ticks = self.ticks, "simulation settled");
        }
        true
    }

    /// Ticks until the simulation stops or `max_ticks` is reached.
    /// Returns the number of ticks taken.
    pub fn run(&mut self, max_ticks: usize) -> usize {
        let mut taken = 0;
        while taken < max_ticks && self.tick() {
            taken += 1;
        }
        taken
    }

    /// Frames, one per tick, until the simulation stops.
    pub fn frames(&mut self) -> Frames<'_> {
        Frames { sim: self }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Resumes ticking; no-op for an empty graph.
    pub fn restart(&mut self) {
        self.running = !self.nodes.is_empty();
    }

    pub fn set_alpha_target(&mut self, target: f64) {
        self.alpha_target = target;
    }

    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    /// Fixes a node at `at`. Returns false for an unknown id.
    pub fn pin(&mut self, id: &str, at: Point) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        node.fx = Some(at.x);
        node.fy = Some(at.y);
        true
    }

    /// Releases a pin. Returns false for an unknown id.
    pub fn unpin(&mut self, id: &str) -> bool {
        let Some(node) = self.node_mut(id) else {
            return false;
        };
        node.fx = None;
        node.fy = None;
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn alpha_target(&self) -> f64 {
        self.alpha_target
    }

    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Links that survived resolution.
    #[must_use]
    pub fn links(&self) -> &[TreeLink] {
        &self.links
    }

    #[must_use]
    pub fn params(&self) -> &ForceParams {
        &self.params
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        self.index.get(id).and_then(|&i| self.nodes.get(i))
    }

    fn node_mut(&mut self, id: &str) -> Option<&mut TreeNode> {
        let i = *self.index.get(id)?;
        self.nodes.get_mut(i)
    }

    #[must_use]
    pub fn positions(&self) -> Vec<NodePosition> {
        self.nodes
            .iter()
            .map(|n| {
                let p = n.position();
                NodePosition {
                    id: n.id.clone(),
                    x: p.x,
                    y: p.y,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn segments(&self) -> Vec<LinkSegment> {
        self.links
            .iter()
            .filter_map(|l| {
                let (s, t) = l.ends()?;
                Some(LinkSegment {
                    id: l.id.clone(),
                    kind: l.kind,
                    from: self.nodes.get(s)?.position(),
                    to: self.nodes.get(t)?.position(),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame {
            tick: self.ticks,
            alpha: self.alpha,
            nodes: self.positions(),
            links: self.segments(),
        }
    }
}

/// Iterator over frames of a running simulation.
pub struct Frames<'a> {
    sim: &'a mut Simulation,
}

impl Iterator for Frames<'_> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.sim.tick().then(|| self.sim.frame())
    }
}

fn resolve(mut link: TreeLink, index: &HashMap<String, usize>) -> Option<TreeLink> {
    let source = resolve_end(&link.source, index);
    let target = resolve_end(&link.target, index);
    match (source, target) {
        (Some(s), Some(t)) => {
            link.source = LinkEnd::Node(s);
            link.target = LinkEnd::Node(t);
            Some(link)
        }
        _ => {
            tracing::debug!(link = %link.id, "endpoint outside node set, dropping link");
            None
        }
    }
}

fn resolve_end(end: &LinkEnd, index: &HashMap<String, usize>) -> Option<usize> {
    match end {
        LinkEnd::Id(id) => index.get(id).copied(),
        LinkEnd::Node(i) => Some(*i),
    }
}

fn seed_positions(nodes: &mut [TreeNode], center: Point) {
    let angle_step = PI * (3.0 - 5.0_f64.sqrt());
    for (i, node) in nodes.iter_mut().enumerate() {
        if node.x.is_some() && node.y.is_some() {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        let radius = INITIAL_RADIUS * (0.5 + i).sqrt();
        let angle = i * angle_step;
        node.x = Some(center.x + radius * angle.cos());
        node.y = Some(center.y + radius * angle.sin());
    }
}
