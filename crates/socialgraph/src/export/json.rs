//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.
//! Nodes are keyed by name, so links refer to people by name.

use crate::error::{GraphError, Result};
use crate::SocialGraph;
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
pub fn export_json(graph: &SocialGraph) -> Result<String> {
    let nodes_array: Vec<Value> = graph
        .people()
        .map(|person| {
            json!({
                "id": person.name(),
                "degree": graph.degree(person.name()),
            })
        })
        .collect();

    let links_array: Vec<Value> = graph
        .friendships()
        .map(|(a, b)| {
            json!({
                "source": a.name(),
                "target": b.name(),
            })
        })
        .collect();

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}
