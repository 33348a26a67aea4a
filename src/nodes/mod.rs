//! Node registry: raw node records fetched from an endpoint and the
//! markers built from them.
//!
//! Records may omit any of their coordinates; missing values are filled
//! with uniform random draws at load time so every marker ends up with
//! fully defined coordinates.

/// Background fetch thread and completion polling.
pub mod loader;
/// Node data sources (HTTP and the capability trait behind it).
pub mod source;

use glam::Vec3;
use rand::Rng;
use serde::Deserialize;

pub use loader::NodeLoader;
pub use source::{HttpNodeSource, NodeSource};

/// Stable identifier for a marker, assigned densely at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub u32);

/// One selectable/hoverable point in the scene, built from a
/// [`NodeRecord`]. Position never changes after load; visual state is
/// derived elsewhere and never stored here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Stable identity.
    pub id: MarkerId,
    /// World-space position.
    pub position: Vec3,
}

/// Raw node record as returned by the endpoint. Any coordinate may be
/// absent; extra fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NodeRecord {
    /// Optional X coordinate.
    pub x: Option<f32>,
    /// Optional Y coordinate.
    pub y: Option<f32>,
    /// Optional Z coordinate.
    pub z: Option<f32>,
}

/// Wire shape of the endpoint response: `{ "nodes": [ .. ] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeResponse {
    /// The node records.
    pub nodes: Vec<NodeRecord>,
}

/// Build markers from raw records, substituting a uniform random value in
/// `[-half_range, half_range]` for each missing coordinate.
///
/// The RNG is injected so tests can load deterministically.
pub fn load_markers<R: Rng>(
    records: &[NodeRecord],
    half_range: f32,
    rng: &mut R,
) -> Vec<Marker> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut fill = |v: Option<f32>| {
                v.unwrap_or_else(|| {
                    rng.random_range(-half_range..=half_range)
                })
            };
            Marker {
                id: MarkerId(i as u32),
                position: Vec3::new(
                    fill(record.x),
                    fill(record.y),
                    fill(record.z),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn explicit_coordinates_pass_through_exactly() {
        let records = [NodeRecord {
            x: Some(1.0),
            y: Some(2.0),
            z: Some(3.0),
        }];
        let mut rng = StdRng::seed_from_u64(7);
        let markers = load_markers(&records, 5.0, &mut rng);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn missing_coordinates_fall_in_range() {
        let records = [
            NodeRecord {
                x: Some(1.0),
                y: Some(2.0),
                z: Some(3.0),
            },
            NodeRecord::default(),
        ];
        let mut rng = StdRng::seed_from_u64(42);
        let markers = load_markers(&records, 5.0, &mut rng);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].position, Vec3::new(1.0, 2.0, 3.0));
        let p = markers[1].position;
        for c in [p.x, p.y, p.z] {
            assert!((-5.0..=5.0).contains(&c), "coordinate {c} out of range");
        }
    }

    #[test]
    fn ids_are_dense_and_stable() {
        let records = vec![NodeRecord::default(); 4];
        let mut rng = StdRng::seed_from_u64(0);
        let markers = load_markers(&records, 5.0, &mut rng);
        let ids: Vec<u32> = markers.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn partial_record_keeps_known_axis() {
        let records = [NodeRecord {
            x: None,
            y: Some(-2.5),
            z: None,
        }];
        let mut rng = StdRng::seed_from_u64(9);
        let markers = load_markers(&records, 5.0, &mut rng);
        assert_eq!(markers[0].position.y, -2.5);
    }

    #[test]
    fn response_parses_with_extra_fields() {
        let body = r#"{"nodes":[{"x":1.5,"label":"a"},{}]}"#;
        let parsed: NodeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.nodes.len(), 2);
        assert_eq!(parsed.nodes[0].x, Some(1.5));
        assert_eq!(parsed.nodes[0].y, None);
    }
}
