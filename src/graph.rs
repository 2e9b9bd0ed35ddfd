//! Defines a `Graph`, the undirected weighted network an estimator exports.
//!
//! A `Graph` is a value: a set of entity nodes plus undirected edges, each carrying a
//! weight and an open-ended bag of attributes. Estimators build a fresh `Graph` on
//! every export and never retain one.

use indexmap::{IndexMap, IndexSet};

/// An open-ended bag of edge metadata, keyed by attribute name.
pub type Attributes = IndexMap<String, AttrValue>;

/// A single attribute value attached to an edge.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {

    /// Free-form text, e.g. the name of an evidence source
    Text(String),

    /// A numeric value, e.g. a score from another analysis
    Number(f64),

    /// A boolean flag
    Flag(bool)

}

impl<'a> From<&'a str> for AttrValue {
    fn from(val: &'a str) -> AttrValue {
        AttrValue::Text(String::from(val))
    }
}

impl From<String> for AttrValue {
    fn from(val: String) -> AttrValue {
        AttrValue::Text(val)
    }
}

impl From<f64> for AttrValue {
    fn from(val: f64) -> AttrValue {
        AttrValue::Number(val)
    }
}

impl From<bool> for AttrValue {
    fn from(val: bool) -> AttrValue {
        AttrValue::Flag(val)
    }
}


/// The payload of a single undirected edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {

    /// The interaction strength that put the edge in the network
    weight: f64,

    /// Extra metadata attached to the edge
    attributes: Attributes

}

impl Edge {

    /// Get the weight of the edge.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Borrow the attribute bag of the edge.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Retrieve a single attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

}


/// An undirected weighted network over labeled entities.
///
/// Nodes and edges iterate in insertion order. Edge identity ignores endpoint
/// orientation: `(a, b)` and `(b, a)` address the same edge, and re-adding an existing
/// edge replaces its weight and attributes while keeping the original orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {

    /// The entities in the network
    nodes: IndexSet<String>,

    /// The undirected edges, keyed by endpoint pair in first-insertion orientation
    edges: IndexMap<(String, String), Edge>

}


impl Graph {

    /// Create an empty `Graph`.
    pub fn new() -> Graph {
        Graph {
            nodes: IndexSet::new(),
            edges: IndexMap::new()
        }
    }


    /// Add a node. Adding a node that is already present has no effect.
    pub fn add_node(&mut self, label: &str) {
        self.nodes.insert(String::from(label));
    }


    /// Add an undirected edge between `a` and `b`.
    ///
    /// Both endpoints are added as nodes if they are not already present. If the edge
    /// exists (in either orientation), its weight and attributes are replaced.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64, attributes: Attributes) {
        self.add_node(a);
        self.add_node(b);

        let reversed = (String::from(b), String::from(a));
        let key = if a != b && self.edges.contains_key(&reversed) {
            reversed
        } else {
            (String::from(a), String::from(b))
        };

        self.edges.insert(key, Edge { weight, attributes });
    }


    /// Check if a node is present.
    pub fn has_node(&self, label: &str) -> bool {
        self.nodes.contains(label)
    }


    /// Check if an edge is present, in either orientation.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge(a, b).is_some()
    }


    /// Retrieve an edge by its endpoints, in either orientation.
    pub fn edge(&self, a: &str, b: &str) -> Option<&Edge> {
        let forward = (String::from(a), String::from(b));
        if let Some(edge) = self.edges.get(&forward) {
            return Some(edge);
        }

        let reversed = (String::from(b), String::from(a));
        self.edges.get(&reversed)
    }


    /// Iterate over the nodes, in insertion order.
    pub fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.nodes.iter().map(|s| s.as_str())
    }


    /// Iterate over the edges, in insertion order.
    pub fn edges<'a>(&'a self) -> impl Iterator<Item = (&'a str, &'a str, &'a Edge)> + 'a {
        self.edges.iter().map(|(&(ref a, ref b), edge)| (a.as_str(), b.as_str(), edge))
    }


    /// Get the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }


    /// Get the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

}
