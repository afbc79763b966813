//! Unit tests for mutual-friend counting and top-k recommendations.

use socialgraph::{Person, Recommendation, SocialGraph};

fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(Person::name).collect()
}

// P is friends with F1, F2, F3.
// Q1 shares F1, F2, F3; Q2 shares F1; Q3 only knows Z (no mutual friends).
fn create_ranked() -> SocialGraph {
    SocialGraph::from_parts(
        ["P", "F1", "F2", "F3", "Q3", "Q2", "Q1", "Z"],
        [
            ("P", "F1"),
            ("P", "F2"),
            ("P", "F3"),
            ("Q1", "F1"),
            ("Q1", "F2"),
            ("Q1", "F3"),
            ("Q2", "F1"),
            ("Q3", "Z"),
        ],
    )
}

#[test]
fn test_common_friends_scenario() {
    let graph = SocialGraph::from_parts(
        ["Alice", "Bob", "Carol", "Dave"],
        [("Alice", "Bob"), ("Bob", "Carol"), ("Carol", "Dave")],
    );
    assert_eq!(graph.common_friends("Alice", "Carol"), 1);
    assert_eq!(graph.common_friends("Carol", "Alice"), 1);
    assert_eq!(graph.common_friends("Alice", "Dave"), 0);
    assert_eq!(graph.common_friends("Alice", "Ghost"), 0);
}

#[test]
fn test_common_friends_counts() {
    let graph = create_ranked();
    assert_eq!(graph.common_friends("P", "Q1"), 3);
    assert_eq!(graph.common_friends("P", "Q2"), 1);
    assert_eq!(graph.common_friends("P", "Q3"), 0);
}

#[test]
fn test_top_k_ranks_by_mutual_friends() {
    let graph = create_ranked();
    assert_eq!(names(&graph.top_k("P", 2)), vec!["Q1", "Q2"]);
}

#[test]
fn test_top_k_excludes_zero_mutual() {
    let graph = create_ranked();
    assert_eq!(names(&graph.top_k("P", 5)), vec!["Q1", "Q2"]);
}

#[test]
fn test_top_k_truncates() {
    let graph = create_ranked();
    assert_eq!(names(&graph.top_k("P", 1)), vec!["Q1"]);
}

#[test]
fn test_top_k_excludes_self_and_friends() {
    let graph = create_ranked();
    let recs = graph.top_k("F1", 10);
    let recs = names(&recs);
    assert!(!recs.contains(&"F1"));
    for friend in ["P", "Q1", "Q2"] {
        assert!(!recs.contains(&friend));
    }
    // F2 and F3 share P and Q1 with F1
    assert_eq!(recs, vec!["F2", "F3"]);
}

#[test]
fn test_top_k_ties_keep_insertion_order() {
    // Each of C, B, A shares exactly one friend (H) with P
    let graph = SocialGraph::from_parts(
        ["P", "C", "H", "B", "A"],
        [("P", "H"), ("A", "H"), ("B", "H"), ("C", "H")],
    );
    assert_eq!(names(&graph.top_k("P", 3)), vec!["C", "B", "A"]);
}

#[test]
fn test_top_k_unknown_or_zero_k() {
    let graph = create_ranked();
    assert!(graph.top_k("Ghost", 3).is_empty());
    assert!(graph.top_k("P", 0).is_empty());
}

#[test]
fn test_top_k_after_friendship_added() {
    let mut graph = create_ranked();
    graph.add_friend("P", "Q1");
    assert_eq!(names(&graph.top_k("P", 5)), vec!["Q2"]);
}

#[test]
fn test_recommendations_expose_counts() {
    let graph = create_ranked();
    let recs = graph.recommendations("P", 5);
    assert_eq!(
        recs,
        vec![
            Recommendation {
                person: Person::new("Q1"),
                mutual_friends: 3,
            },
            Recommendation {
                person: Person::new("Q2"),
                mutual_friends: 1,
            },
        ]
    );

    let json = serde_json::to_value(&recs[0]).unwrap();
    assert_eq!(json["person"]["name"], "Q1");
    assert_eq!(json["mutual_friends"], 3);
}
