// src/layout/forces.rs
//! One simulation step as a pure function of the node list.
//!
//! Forces run in order (link springs, many-body charge, centering, collision)
//! and only touch velocities, except centering which translates positions.
//! Integration then applies velocity decay and pins.

use crate::config::LayoutConfig;

use super::node::{Point, TreeNode};

/// Minimum squared distance for charge, so coincident nodes don't explode.
const CHARGE_DISTANCE_MIN2: f64 = 1.0;
const COLLIDE_STRENGTH: f64 = 1.0;

/// Physical parameters for one layout session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceParams {
    pub link_distance: f64,
    pub link_strength: f64,
    pub charge_strength: f64,
    pub collide_radius: f64,
    pub center: Point,
    pub velocity_decay: f64,
}

impl ForceParams {
    #[must_use]
    pub fn from_config(config: &LayoutConfig, width: f64, height: f64) -> Self {
        Self {
            link_distance: config.link_distance,
            link_strength: config.link_strength,
            charge_strength: config.charge_strength,
            collide_radius: config.collide_radius,
            center: Point::new(width / 2.0, height / 2.0),
            velocity_decay: config.velocity_decay,
        }
    }
}

impl Default for ForceParams {
    fn default() -> Self {
        let config = LayoutConfig::default();
        Self::from_config(&config, config.width, config.height)
    }
}

/// A link reduced to node positions, with its spring bias precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub source: usize,
    pub target: usize,
    /// Share of the correction applied to the target; the rest goes to the source.
    pub bias: f64,
}

impl Spring {
    /// Springs with degree-weighted bias, so well-connected nodes move less.
    #[must_use]
    pub fn from_pairs(pairs: &[(usize, usize)], node_count: usize) -> Vec<Spring> {
        let mut degree = vec![0_usize; node_count];
        for &(s, t) in pairs {
            degree[s] += 1;
            degree[t] += 1;
        }
        pairs
            .iter()
            .map(|&(s, t)| {
                #[allow(clippy::cast_precision_loss)]
                let (ds, dt) = (degree[s] as f64, degree[t] as f64);
                Spring {
                    source: s,
                    target: t,
                    bias: ds / (ds + dt),
                }
            })
            .collect()
    }
}

/// Returns the nodes after one tick at `alpha`.
#[must_use]
pub fn advance(nodes: &[TreeNode], springs: &[Spring], params: &ForceParams, alpha: f64) -> Vec<TreeNode> {
    let mut next = nodes.to_vec();
    apply_links(&mut next, springs, params, alpha);
    apply_charge(&mut next, params, alpha);
    apply_center(&mut next, params.center);
    apply_collision(&mut next, params.collide_radius);
    integrate(&mut next, params.velocity_decay);
    next
}

fn xy(node: &TreeNode) -> (f64, f64) {
    (node.x.unwrap_or_default(), node.y.unwrap_or_default())
}

/// Tiny deterministic offset to separate coincident nodes.
#[allow(clippy::cast_precision_loss)]
fn jiggle(seed: usize) -> f64 {
    let h = seed.wrapping_mul(2_654_435_761) % 1000;
    (h as f64 / 1000.0 - 0.5) * 1e-6
}

fn apply_links(nodes: &mut [TreeNode], springs: &[Spring], params: &ForceParams, alpha: f64) {
    for (i, spring) in springs.iter().enumerate() {
        if spring.source == spring.target {
            continue;
        }
        let (sx, sy) = xy(&nodes[spring.source]);
        let (tx, ty) = xy(&nodes[spring.target]);
        let s = &nodes[spring.source];
        let t = &nodes[spring.target];
        let mut dx = tx + t.vx - sx - s.vx;
        let mut dy = ty + t.vy - sy - s.vy;
        if dx == 0.0 {
            dx = jiggle(i);
        }
        if dy == 0.0 {
            dy = jiggle(i + 1);
        }
        let len = dx.hypot(dy);
        let k = (len - params.link_distance) / len * alpha * params.link_strength;
        dx *= k;
        dy *= k;

        let target = &mut nodes[spring.target];
        target.vx -= dx * spring.bias;
        target.vy -= dy * spring.bias;
        let source = &mut nodes[spring.source];
        source.vx += dx * (1.0 - spring.bias);
        source.vy += dy * (1.0 - spring.bias);
    }
}

/// Exact pairwise charge; trees here are hundreds of nodes at most.
fn apply_charge(nodes: &mut [TreeNode], params: &ForceParams, alpha: f64) {
    let positions: Vec<(f64, f64)> = nodes.iter().map(xy).collect();
    for (i, node) in nodes.iter_mut().enumerate() {
        let (xi, yi) = positions[i];
        for (j, &(xj, yj)) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let mut dx = xj - xi;
            let mut dy = yj - yi;
            if dx == 0.0 {
                dx = jiggle(i * 31 + j);
            }
            if dy == 0.0 {
                dy = jiggle(j * 31 + i);
            }
            let mut l = dx * dx + dy * dy;
            if l < CHARGE_DISTANCE_MIN2 {
                l = (CHARGE_DISTANCE_MIN2 * l).sqrt();
            }
            let w = params.charge_strength * alpha / l;
            node.vx += dx * w;
            node.vy += dy * w;
        }
    }
}

fn apply_center(nodes: &mut [TreeNode], center: Point) {
    if nodes.is_empty() {
        return;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = nodes.len() as f64;
    let (sx, sy) = nodes
        .iter()
        .map(xy)
        .fold((0.0, 0.0), |(ax, ay), (x, y)| (ax + x, ay + y));
    let shift_x = sx / n - center.x;
    let shift_y = sy / n - center.y;
    for node in nodes {
        let (x, y) = xy(node);
        node.x = Some(x - shift_x);
        node.y = Some(y - shift_y);
    }
}

/// Pushes apart any pair whose predicted positions are closer than two radii.
fn apply_collision(nodes: &mut [TreeNode], radius: f64) {
    let reach = radius * 2.0;
    let reach2 = reach * reach;
    for i in 0..nodes.len() {
        let (x, y) = xy(&nodes[i]);
        let xi = x + nodes[i].vx;
        let yi = y + nodes[i].vy;
        for j in (i + 1)..nodes.len() {
            let (xj, yj) = xy(&nodes[j]);
            let mut dx = xi - xj - nodes[j].vx;
            let mut dy = yi - yj - nodes[j].vy;
            let mut l = dx * dx + dy * dy;
            if l >= reach2 {
                continue;
            }
            if dx == 0.0 {
                dx = jiggle(i * 17 + j);
                l += dx * dx;
            }
            if dy == 0.0 {
                dy = jiggle(j * 17 + i);
                l += dy * dy;
            }
            let len = l.sqrt();
            let k = (reach - len) / len * COLLIDE_STRENGTH;
            dx *= k;
            dy *= k;
            // Equal radii: the correction splits evenly.
            nodes[i].vx += dx * 0.5;
            nodes[i].vy += dy * 0.5;
            nodes[j].vx -= dx * 0.5;
            nodes[j].vy -= dy * 0.5;
        }
    }
}

fn integrate(nodes: &mut [TreeNode], velocity_decay: f64) {
    let keep = 1.0 - velocity_decay;
    for node in nodes {
        let (x, y) = xy(node);
        match node.fx {
            Some(fx) => {
                node.x = Some(fx);
                node.vx = 0.0;
            }
            None => {
                node.vx *= keep;
                node.x = Some(x + node.vx);
            }
        }
        match node.fy {
            Some(fy) => {
                node.y = Some(fy);
                node.vy = 0.0;
            }
            None => {
                node.vy *= keep;
                node.y = Some(y + node.vy);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Person;

    fn at(id: &str, x: f64, y: f64) -> TreeNode {
        let mut n = TreeNode::new(Person::new(id, id, "Test"));
        n.x = Some(x);
        n.y = Some(y);
        n
    }

    #[test]
    fn advance_leaves_input_untouched() {
        let nodes = vec![at("a", 0.0, 0.0), at("b", 10.0, 0.0)];
        let before = nodes.clone();
        let _ = advance(&nodes, &[], &ForceParams::default(), 1.0);
        assert_eq!(nodes, before);
    }

    #[test]
    fn pinned_node_snaps_to_pin() {
        let mut nodes = vec![at("a", 0.0, 0.0), at("b", 5.0, 5.0)];
        nodes[0].fx = Some(42.0);
        nodes[0].fy = Some(-7.0);
        let next = advance(&nodes, &[], &ForceParams::default(), 1.0);
        assert_eq!(next[0].position(), Point::new(42.0, -7.0));
        assert_eq!((next[0].vx, next[0].vy), (0.0, 0.0));
    }

    #[test]
    fn charge_pushes_apart() {
        let nodes = vec![at("a", 590.0, 400.0), at("b", 610.0, 400.0)];
        let mut params = ForceParams::default();
        params.collide_radius = 0.0;
        let next = advance(&nodes, &[], &params, 1.0);
        assert!(next[0].position().distance(next[1].position()) > 20.0);
    }

    #[test]
    fn bias_follows_degree() {
        let springs = Spring::from_pairs(&[(0, 1), (0, 2)], 3);
        assert!((springs[0].bias - 2.0 / 3.0).abs() < 1e-12);
    }
}
