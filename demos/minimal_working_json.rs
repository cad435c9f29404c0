//! Builds the BloodHound OpenGraph "minimal working JSON" document and writes
//! it to `minimal_working_json.json` in the current directory.

use anyhow::Result;
use opengraph::{Edge, Graph, Node, Properties};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mut graph = Graph::new("Base");

    let mut bob_props = Properties::new();
    bob_props.set("displayname", "bob");
    bob_props.set("property", "a");
    bob_props.set("objectid", "123");
    bob_props.set("name", "BOB");
    let bob = Node::new_with_properties(
        "123",
        vec!["Person".to_string(), "Base".to_string()],
        bob_props,
    )?;

    let mut alice_props = Properties::new();
    alice_props.set("displayname", "alice");
    alice_props.set("property", "b");
    alice_props.set("objectid", "234");
    alice_props.set("name", "ALICE");
    let alice = Node::new_with_properties(
        "234",
        vec!["Person".to_string(), "Base".to_string()],
        alice_props,
    )?;

    graph.add_node(bob)?;
    graph.add_node(alice)?;

    // Bob knows Alice
    graph.add_edge(Edge::new("123", "234", "Knows")?)?;

    graph.export_to_file("minimal_working_json.json")?;
    println!("{}", graph);

    Ok(())
}
