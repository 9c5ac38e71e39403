use serde::{Deserialize, Serialize};

/// Per-field weights for the fuzzy matcher. Normalized to sum 1 at index time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeights {
    #[serde(default = "w_first")]
    pub first_name: f64,
    #[serde(default = "w_last")]
    pub last_name: f64,
    #[serde(default = "w_minor")]
    pub middle_name: f64,
    #[serde(default = "w_secondary")]
    pub maiden_name: f64,
    #[serde(default = "w_minor")]
    pub nickname: f64,
    #[serde(default = "w_minor")]
    pub birth_place: f64,
    #[serde(default = "w_minor")]
    pub death_place: f64,
    #[serde(default = "w_secondary")]
    pub occupation: f64,
    #[serde(default = "w_minor")]
    pub biography: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            first_name: w_first(),
            last_name: w_last(),
            middle_name: w_minor(),
            maiden_name: w_secondary(),
            nickname: w_minor(),
            birth_place: w_minor(),
            death_place: w_minor(),
            occupation: w_secondary(),
            biography: w_minor(),
        }
    }
}

const fn w_first() -> f64 { 0.3 }
const fn w_last() -> f64 { 0.4 }
const fn w_secondary() -> f64 { 0.2 }
const fn w_minor() -> f64 { 0.1 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum accepted match score; 0 is a perfect match, 1 matches anything.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Query tokens shorter than this are ignored.
    #[serde(default = "default_min_token_len")]
    pub min_token_len: usize,
    #[serde(default)]
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_token_len: default_min_token_len(),
            weights: FieldWeights::default(),
        }
    }
}

const fn default_threshold() -> f64 { 0.4 }
const fn default_min_token_len() -> usize { 2 }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_link_distance")]
    pub link_distance: f64,
    #[serde(default = "default_link_strength")]
    pub link_strength: f64,
    /// Negative repels.
    #[serde(default = "default_charge")]
    pub charge_strength: f64,
    #[serde(default = "default_collide_radius")]
    pub collide_radius: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_alpha_min")]
    pub alpha_min: f64,
    #[serde(default = "default_alpha_decay")]
    pub alpha_decay: f64,
    #[serde(default = "default_velocity_decay")]
    pub velocity_decay: f64,
    /// Alpha target while a node is being dragged.
    #[serde(default = "default_drag_alpha")]
    pub drag_alpha_target: f64,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            link_distance: default_link_distance(),
            link_strength: default_link_strength(),
            charge_strength: default_charge(),
            collide_radius: default_collide_radius(),
            width: default_width(),
            height: default_height(),
            alpha_min: default_alpha_min(),
            alpha_decay: default_alpha_decay(),
            velocity_decay: default_velocity_decay(),
            drag_alpha_target: default_drag_alpha(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

const fn default_link_distance() -> f64 { 100.0 }
const fn default_link_strength() -> f64 { 0.5 }
const fn default_charge() -> f64 { -300.0 }
const fn default_collide_radius() -> f64 { 40.0 }
const fn default_width() -> f64 { 1200.0 }
const fn default_height() -> f64 { 800.0 }
const fn default_alpha_min() -> f64 { 0.001 }
const fn default_velocity_decay() -> f64 { 0.4 }
const fn default_drag_alpha() -> f64 { 0.3 }
const fn default_min_zoom() -> f64 { 0.1 }
const fn default_max_zoom() -> f64 { 3.0 }

/// Cools from 1 to `alpha_min` in about 300 ticks.
fn default_alpha_decay() -> f64 {
    1.0 - default_alpha_min().powf(1.0 / 300.0)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatesConfig {
    /// Year ages and generation bands are measured from. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_year: Option<i32>,
}

/// Parsed `lineage.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineageToml {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub dates: DatesConfig,
}
