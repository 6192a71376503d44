use std::collections::BTreeMap;

use rand::Rng;

use crate::config::LayoutConfig;
use crate::error::{RenderError, Result};
use crate::ir::Network;

#[derive(Debug, Clone)]
pub struct NodeLayout {
    pub id: String,
    pub layer: usize,
    pub slot: usize,
    /// Top-left corner of the node's bounding box.
    pub x: f32,
    pub y: f32,
    /// The node's visual center, used as a line endpoint.
    pub anchor: (f32, f32),
}

/// A connection with both endpoints already resolved to anchor points.
#[derive(Debug, Clone)]
pub struct EdgeLayout {
    pub from: String,
    pub to: String,
    pub start: (f32, f32),
    pub end: (f32, f32),
}

#[derive(Debug, Clone)]
pub struct Layout {
    /// Nodes in production order: layers in input order, then nodes within
    /// each layer in input order.
    pub nodes: Vec<NodeLayout>,
    /// Connections in input order.
    pub edges: Vec<EdgeLayout>,
    pub width: f32,
    pub height: f32,
}

/// The unconsumed vertical slots of one diagram. Drawing removes the chosen
/// entry, so no two nodes anywhere in the diagram can share a vertical level.
#[derive(Debug)]
pub struct SlotPool {
    remaining: Vec<usize>,
    capacity: usize,
}

impl SlotPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            remaining: (0..capacity).collect(),
            capacity,
        }
    }

    /// Removes and returns a uniformly chosen remaining slot.
    pub fn draw(&mut self, rng: &mut impl Rng) -> Result<usize> {
        if self.remaining.is_empty() {
            return Err(RenderError::SlotExhaustion {
                declared: self.capacity,
            });
        }
        let index = rng.random_range(0..self.remaining.len());
        Ok(self.remaining.swap_remove(index))
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// Assigns every node a unique slot in `[0, total_node_count)`. The RNG is
/// injected so tests can seed it; layouts across runs are allowed to differ.
pub fn assign_slots(network: &Network, rng: &mut impl Rng) -> Result<BTreeMap<String, usize>> {
    let declared = network.declared_node_count();
    let found = network.layer_node_count();
    if declared != found {
        return Err(RenderError::CountMismatch { declared, found });
    }

    let mut pool = SlotPool::new(declared);
    let mut slots = BTreeMap::new();
    for layer in &network.layers {
        for id in layer {
            slots.insert(id.clone(), pool.draw(rng)?);
        }
    }
    Ok(slots)
}

/// Places every node on the pixel grid, sizes the canvas, and resolves every
/// connection to its endpoint anchors. Nothing is drawn until all of this
/// has succeeded.
pub fn compute_layout(
    network: &Network,
    config: &LayoutConfig,
    rng: &mut impl Rng,
) -> Result<Layout> {
    let slots = assign_slots(network, rng)?;
    let radius = config.node_radius();

    let mut nodes = Vec::with_capacity(network.layer_node_count());
    let mut anchors: BTreeMap<&str, (f32, f32)> = BTreeMap::new();
    for (layer_index, layer) in network.layers.iter().enumerate() {
        let x = (layer_index as f32 + 1.0) * config.step;
        for id in layer {
            let slot = slots[id.as_str()];
            let y = slot as f32 * config.step;
            let anchor = (x + radius, y + radius);
            anchors.insert(id.as_str(), anchor);
            nodes.push(NodeLayout {
                id: id.clone(),
                layer: layer_index,
                slot,
                x,
                y,
                anchor,
            });
        }
    }

    let mut edges = Vec::with_capacity(network.connections.len());
    for connection in &network.connections {
        let start = resolve_anchor(&anchors, connection.source())?;
        let end = resolve_anchor(&anchors, connection.target())?;
        edges.push(EdgeLayout {
            from: connection.source().to_string(),
            to: connection.target().to_string(),
            start,
            end,
        });
    }

    Ok(Layout {
        nodes,
        edges,
        width: (network.layer_count() as f32 + 1.0) * config.step,
        height: (network.layer_node_count() as f32 + 1.0) * config.step,
    })
}

fn resolve_anchor(anchors: &BTreeMap<&str, (f32, f32)>, id: &str) -> Result<(f32, f32)> {
    anchors
        .get(id)
        .copied()
        .ok_or_else(|| RenderError::UnknownNodeReference(id.to_string()))
}
