//! Basic usage example for socialgraph
//!
//! This example demonstrates:
//! - Building a small network
//! - Shortest paths, with and without a blacklist
//! - Friend recommendations
//! - Rendering the network

use socialgraph::{export, SocialGraph};

fn main() -> socialgraph::Result<()> {
    let mut graph = SocialGraph::new();

    println!("Creating a small social network...\n");

    for name in ["Alice", "Bob", "Carol", "Dave", "Erin"] {
        graph.try_add_person(name)?;
        println!("✓ Added person: {name}");
    }

    for (a, b) in [("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Dave"), ("Erin", "Bob")] {
        graph.try_add_friend(a, b)?;
        println!("✓ {a} and {b} are now friends");
    }

    // Refused mutations are reported by the try_* methods
    if let Err(e) = graph.try_add_friend("Alice", "Alice") {
        println!("✗ {e}");
    }

    println!("\nNetwork:");
    print!("{}", export::format_network(&graph));

    let path = graph.shortest_path("Alice", "Dave");
    println!("\nShortest path Alice -> Dave: {}", export::format_path(&path));

    let avoiding = graph.shortest_path_avoiding("Alice", "Dave", ["Bob"]);
    if avoiding.is_empty() {
        println!("No path Alice -> Dave avoiding Bob");
    }

    println!(
        "Common friends of Alice and Carol: {}",
        graph.common_friends("Alice", "Carol")
    );

    for rec in graph.recommendations("Alice", 3) {
        println!(
            "Suggest {} to Alice ({} mutual friends)",
            rec.person, rec.mutual_friends
        );
    }

    println!("\nDOT:\n{}", graph.export_dot());

    Ok(())
}
