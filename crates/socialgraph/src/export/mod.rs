//! Rendering the graph for people and external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//! - **Text**: Console listing of the network and of paths
//!
//! These are output formats only; nothing is ever loaded back from them.

pub mod dot;
pub mod json;
pub mod text;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;
pub use text::{format_network, format_path};
