//! Plain-text rendering for consoles.

use crate::{Person, SocialGraph};

/// Space-joined names, e.g. `"Alice Bob Carol"`. Empty for an empty path.
pub fn format_path(people: &[Person]) -> String {
    people
        .iter()
        .map(Person::name)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per person, in insertion order: `name: friend friend ...`.
///
/// A person without friends is listed with nothing after the colon.
pub fn format_network(graph: &SocialGraph) -> String {
    let mut output = String::new();
    for (person, friends) in graph.network() {
        output.push_str(person.name());
        output.push(':');
        if !friends.is_empty() {
            output.push(' ');
            output.push_str(&format_path(&friends));
        }
        output.push('\n');
    }
    output
}
