use serde::Deserialize;

/// A connection as it appears on the wire: a `[source, target]` pair.
/// Direction is recorded but rendered as an undirected segment.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection(pub String, pub String);

impl Connection {
    pub fn source(&self) -> &str {
        &self.0
    }

    pub fn target(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Network {
    /// Only the length of `nodes` matters; entry content is never inspected.
    pub nodes: Vec<serde_json::Value>,
    pub layers: Vec<Vec<String>>,
    pub connections: Vec<Connection>,
}

impl Network {
    /// The node count the document claims, which sizes the slot pool.
    pub fn declared_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The identifiers actually listed across all layers.
    pub fn layer_node_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}
