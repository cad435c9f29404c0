//! End-to-end tests for the graph container: construction, mutation,
//! referential integrity and traversal.

use opengraph::{Edge, Graph, GraphError, Node, Properties, PropertyValue};

fn person(id: &str, name: &str) -> Node {
    let mut props = Properties::new();
    props.set("name", name);
    Node::new_with_properties(id, vec!["Person".to_string()], props).unwrap()
}

#[test]
fn test_build_small_infrastructure_graph() {
    let mut graph = Graph::new("ACME");

    graph.add_node(person("alice", "Alice")).unwrap();
    graph.add_node(person("bob", "Bob")).unwrap();

    let mut server = Node::new_with_kinds("srv-01", vec!["Computer".to_string()]).unwrap();
    server.set_property("os", "Linux");
    server.set_property("ports", PropertyValue::Array(vec![
        PropertyValue::Integer(22),
        PropertyValue::Integer(443),
    ]));
    graph.add_node(server).unwrap();

    let mut admin_to = Edge::new("alice", "srv-01", "AdminTo").unwrap();
    admin_to.set_property("since", 2021i64);
    graph.add_edge(admin_to).unwrap();
    graph.add_edge(Edge::new("alice", "bob", "Knows").unwrap()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.len(), 5);

    // The source kind was stamped onto every node
    for node in graph.nodes() {
        assert!(node.has_kind("ACME"));
    }

    assert_eq!(graph.get_nodes_by_kind("Person").len(), 2);
    assert_eq!(graph.get_nodes_by_kind("Computer").len(), 1);
    assert_eq!(graph.get_edges_from("alice").len(), 2);
    assert_eq!(graph.get_edges_to("srv-01").len(), 1);
    assert_eq!(graph.get_edges_by_kind("AdminTo").len(), 1);
}

#[test]
fn test_edge_construction_contract() {
    // Any non-empty triple constructs; any empty field fails
    assert!(Edge::new("a", "b", "Knows").is_ok());
    assert_eq!(Edge::new("", "b", "k").unwrap_err(), GraphError::EmptyEdgeStart);
    assert_eq!(Edge::new("a", "", "k").unwrap_err(), GraphError::EmptyEdgeEnd);
    assert_eq!(Edge::new("a", "b", "").unwrap_err(), GraphError::EmptyEdgeKind);
}

#[test]
fn test_add_node_is_idempotent_safe() {
    let mut graph = Graph::new("");
    graph.add_node(person("alice", "Alice")).unwrap();

    let result = graph.add_node(person("alice", "Impostor"));
    assert_eq!(
        result.unwrap_err(),
        GraphError::NodeAlreadyExists("alice".to_string())
    );

    // First node's properties and kinds are unchanged
    let node = graph.get_node("alice").unwrap();
    assert_eq!(node.get_property("name").unwrap().as_string(), Some("Alice"));
    assert_eq!(node.kinds(), &["Person".to_string()]);
}

#[test]
fn test_add_edge_rejects_unknown_endpoints_and_duplicates() {
    let mut graph = Graph::new("");
    graph.add_node(person("alice", "Alice")).unwrap();
    graph.add_node(person("bob", "Bob")).unwrap();

    assert!(matches!(
        graph.add_edge(Edge::new("alice", "nobody", "Knows").unwrap()),
        Err(GraphError::EdgeEndNotFound(_))
    ));
    assert!(matches!(
        graph.add_edge(Edge::new("nobody", "bob", "Knows").unwrap()),
        Err(GraphError::EdgeStartNotFound(_))
    ));

    graph.add_edge(Edge::new("alice", "bob", "Knows").unwrap()).unwrap();

    // Exact triple duplicate is rejected even with different properties
    let mut dup = Edge::new("alice", "bob", "Knows").unwrap();
    dup.set_property("weight", 1.0);
    assert!(matches!(
        graph.add_edge(dup),
        Err(GraphError::DuplicateEdge { .. })
    ));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_remove_node_leaves_no_dangling_edges() {
    let mut graph = Graph::new("");
    for id in ["a", "b", "c", "d"] {
        graph.add_node(Node::new(id).unwrap()).unwrap();
    }
    graph.add_edge(Edge::new("a", "b", "E").unwrap()).unwrap();
    graph.add_edge(Edge::new("b", "c", "E").unwrap()).unwrap();
    graph.add_edge(Edge::new("c", "d", "E").unwrap()).unwrap();
    graph.add_edge(Edge::new("d", "b", "E").unwrap()).unwrap();

    graph.remove_node("b").unwrap();

    assert!(!graph.has_node("b"));
    for edge in graph.edges() {
        assert_ne!(edge.start(), "b");
        assert_ne!(edge.end(), "b");
    }
    assert_eq!(graph.edge_count(), 1); // only c -> d survives
}

#[test]
fn test_find_paths_connects_scenario() {
    let mut graph = Graph::new("");
    for id in ["A", "B", "C"] {
        graph.add_node(Node::new(id).unwrap()).unwrap();
    }
    graph
        .add_edge(Edge::new("A", "B", "CONNECTS_TO").unwrap())
        .unwrap();
    graph
        .add_edge(Edge::new("B", "C", "CONNECTS_TO").unwrap())
        .unwrap();

    let paths = graph.find_paths("A", "C", 2).unwrap();
    assert_eq!(
        paths,
        vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]
    );

    // Unknown endpoint: absent result, not a failure
    assert_eq!(graph.find_paths("A", "D", 2), None);
}

#[test]
fn test_find_paths_trivial_path_for_any_depth() {
    let mut graph = Graph::new("");
    graph.add_node(Node::new("x").unwrap()).unwrap();

    for depth in [0usize, 1, 5, 100] {
        assert_eq!(
            graph.find_paths("x", "x", depth),
            Some(vec![vec!["x".to_string()]])
        );
    }
}

#[test]
fn test_connected_components_scenario() {
    let mut graph = Graph::new("");
    for id in ["1", "2", "3", "4"] {
        graph.add_node(Node::new(id).unwrap()).unwrap();
    }
    graph.add_edge(Edge::new("1", "2", "E").unwrap()).unwrap();
    graph.add_edge(Edge::new("3", "4", "E").unwrap()).unwrap();

    let components = graph.connected_components();
    assert_eq!(components.len(), 2);
    assert!(components.iter().all(|c| c.len() == 2));

    let first = components
        .iter()
        .find(|c| c.contains("1"))
        .expect("component containing node 1");
    assert!(first.contains("2"));
}

#[test]
fn test_kinds_survive_mutation_in_place() {
    let mut graph = Graph::new("Base");
    graph
        .add_node(Node::new_with_kinds("n", vec!["Person".to_string()]).unwrap())
        .unwrap();

    let node = graph.get_node_mut("n").unwrap();
    node.add_kind("Admin");
    node.remove_kind("Person");

    let node = graph.get_node("n").unwrap();
    assert_eq!(node.kinds(), &["Base".to_string(), "Admin".to_string()]);
}

#[test]
fn test_clear_then_rebuild() {
    let mut graph = Graph::new("Base");
    graph.add_node(Node::new("a").unwrap()).unwrap();
    graph.add_node(Node::new("b").unwrap()).unwrap();
    graph.add_edge(Edge::new("a", "b", "E").unwrap()).unwrap();

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.source_kind(), "Base");

    graph.add_node(Node::new("a").unwrap()).unwrap();
    assert_eq!(graph.node_count(), 1);
}
