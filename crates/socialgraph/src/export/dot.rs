//! DOT format export for Graphviz visualization.

use crate::{Person, SocialGraph};
use std::collections::HashSet;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Name of the emitted graph
    pub graph_name: String,
    /// Node shape (box, circle, ellipse, etc.)
    pub node_shape: String,
    /// Fill color for ordinary nodes (hex color code)
    pub fill_color: String,
    /// People drawn in the highlight color, e.g. a shortest path
    pub highlight: Vec<Person>,
    /// Fill color for highlighted nodes and the edges between them
    pub highlight_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            graph_name: "social_graph".to_string(),
            node_shape: "ellipse".to_string(),
            fill_color: "#E0E0E0".to_string(),
            highlight: Vec::new(),
            highlight_color: "#FFE082".to_string(),
        }
    }
}

impl DotOptions {
    /// Highlight the people of a path.
    pub fn with_highlight(mut self, people: impl IntoIterator<Item = Person>) -> Self {
        self.highlight = people.into_iter().collect();
        self
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &SocialGraph) -> String {
    export_dot_styled(graph, DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
///
/// People are emitted in insertion order, then one undirected edge per
/// friendship in insertion order.
pub fn export_dot_styled(graph: &SocialGraph, options: DotOptions) -> String {
    let highlighted: HashSet<&str> = options.highlight.iter().map(Person::name).collect();
    let mut output = String::new();

    // Header
    output.push_str(&format!("graph {} {{\n", escape_dot_id(&options.graph_name)));
    output.push_str(&format!(
        "    node [style=filled, shape={}];\n",
        options.node_shape
    ));
    output.push('\n');

    for person in graph.people() {
        let color = if highlighted.contains(person.name()) {
            &options.highlight_color
        } else {
            &options.fill_color
        };
        output.push_str(&format!(
            "    {} [fillcolor=\"{color}\"];\n",
            escape_dot_id(person.name())
        ));
    }

    output.push('\n');

    for (a, b) in graph.friendships() {
        let color = if highlighted.contains(a.name()) && highlighted.contains(b.name()) {
            format!(" [color=\"{}\", penwidth=2]", options.highlight_color)
        } else {
            String::new()
        };
        output.push_str(&format!(
            "    {} -- {}{color};\n",
            escape_dot_id(a.name()),
            escape_dot_id(b.name())
        ));
    }

    output.push_str("}\n");
    output
}

/// Quote and escape a name for use as a DOT identifier
fn escape_dot_id(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}
