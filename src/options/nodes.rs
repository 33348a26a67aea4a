use serde::{Deserialize, Serialize};

/// Node source and marker parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeOptions {
    /// Endpoint URL returning `{ "nodes": [ .. ] }`.
    pub endpoint: String,
    /// Half-width of the symmetric range used for missing coordinates:
    /// a missing value is drawn uniformly from `[-range, range]`.
    pub coordinate_range: f32,
    /// Rendered marker sphere radius.
    pub marker_radius: f32,
    /// Picking sphere radius. Slightly larger than the rendered radius
    /// so markers are comfortable to hit.
    pub pick_radius: f32,
}

impl Default for NodeOptions {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/nodes".into(),
            coordinate_range: 5.0,
            marker_radius: 0.1,
            pick_radius: 0.25,
        }
    }
}
