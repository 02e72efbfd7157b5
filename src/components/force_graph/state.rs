use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::config::ForceGraphConfig;
use super::scale::{display_label, node_radius};
use crate::graph::GraphData;

/// Minimum pick radius in world space; small nodes stay clickable.
pub const HIT_RADIUS: f64 = 10.0;
/// Screen-space distance a press may travel and still count as a click.
const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub radius: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Layout plus interaction state for one graph snapshot. The physics lives in
/// `force_graph`; this only seeds it, ticks it and reads positions back.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub config: ForceGraphConfig,
	pub current: Option<String>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl ForceGraphState {
	pub fn new(
		data: &GraphData,
		current: Option<String>,
		config: ForceGraphConfig,
		width: f64,
		height: f64,
	) -> Self {
		let mut graph = ForceGraph::new(config.simulation());
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0 + node.link_count as f32,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: display_label(&node.title, config.label_max_chars),
					radius: node_radius(node.link_count),
				},
			});
			id_to_idx.insert(node.id.as_str(), idx);
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) = (
				id_to_idx.get(link.source.as_str()),
				id_to_idx.get(link.target.as_str()),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			config,
			current,
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen position.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let r = node.data.user_data.radius.max(HIT_RADIUS);
			if (dx * dx + dy * dy).sqrt() < r {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	/// Current world-space position of every node, keyed by note id.
	pub fn positions(&self) -> Vec<(String, f32, f32)> {
		let mut out = Vec::new();
		self.graph.visit_nodes(|node| {
			out.push((node.data.user_data.id.clone(), node.x(), node.y()));
		});
		out
	}

	pub fn is_current(&self, info: &NodeInfo) -> bool {
		self.current.as_deref() == Some(info.id.as_str())
	}

	pub fn begin_drag(&mut self, idx: DefaultNodeIdx, x: f64, y: f64) {
		self.drag.active = true;
		self.drag.moved = false;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		let (mut nx, mut ny) = (0.0, 0.0);
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				nx = node.x();
				ny = node.y();
			}
		});
		self.drag.node_start_x = nx;
		self.drag.node_start_y = ny;
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let Some(idx) = self.drag.node_idx else {
			return;
		};
		if (x - self.drag.start_x).hypot(y - self.drag.start_y) > CLICK_SLOP {
			self.drag.moved = true;
		}
		if !self.drag.moved {
			return;
		}
		let (dx, dy) = (
			(x - self.drag.start_x) / self.transform.k,
			(y - self.drag.start_y) / self.transform.k,
		);
		let (nx, ny) = (
			self.drag.node_start_x + dx as f32,
			self.drag.node_start_y + dy as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
				node.data.is_anchor = true;
			}
		});
	}

	/// Ends a drag or pan. Returns the note id when the press was a click on a
	/// node rather than a drag.
	pub fn release(&mut self) -> Option<String> {
		let clicked = match (self.drag.active, self.drag.moved, self.drag.node_idx) {
			(true, false, Some(idx)) => self.node_id(idx),
			_ => None,
		};
		self.drag.active = false;
		self.drag.moved = false;
		self.drag.node_idx = None;
		self.pan.active = false;
		clicked
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the old set around so it can fade out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.1, 10.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Note, build_graph};

	fn state() -> ForceGraphState {
		let notes = vec![
			Note::new("hub", "Hub", "[[A]] [[B]]"),
			Note::new("a", "A", ""),
			Note::new("b", "B", ""),
			Note::new("lone", "", ""),
		];
		ForceGraphState::new(
			&build_graph(&notes),
			Some("a".into()),
			ForceGraphConfig::default(),
			800.0,
			600.0,
		)
	}

	#[test]
	fn seeds_one_layout_node_per_graph_node() {
		let s = state();
		let ids: Vec<String> = s.positions().into_iter().map(|(id, _, _)| id).collect();
		assert_eq!(ids, vec!["hub", "a", "b", "lone"]);
	}

	#[test]
	fn hover_collects_neighbors() {
		let mut s = state();
		let mut hub = None;
		s.graph.visit_nodes(|n| {
			if n.data.user_data.id == "hub" {
				hub = Some(n.index());
			}
		});
		s.set_hover(hub);
		assert_eq!(s.hover.neighbors.len(), 2);
	}

	#[test]
	fn click_without_movement_selects() {
		let mut s = state();
		let (_, x, y) = s.positions()[1].clone();
		let (sx, sy) = (x as f64 + s.transform.x, y as f64 + s.transform.y);
		let idx = s.node_at_position(sx, sy).unwrap();
		s.begin_drag(idx, sx, sy);
		s.drag_to(sx + 1.0, sy);
		assert_eq!(s.release().as_deref(), Some("a"));

		s.begin_drag(idx, sx, sy);
		s.drag_to(sx + 50.0, sy);
		assert_eq!(s.release(), None);
	}

	#[test]
	fn labels_and_accent() {
		let s = state();
		let mut seen = Vec::new();
		s.graph.visit_nodes(|n| {
			seen.push((n.data.user_data.label.clone(), s.is_current(&n.data.user_data)));
		});
		assert!(seen.contains(&("A".to_string(), true)));
		assert!(seen.contains(&("Untitled".to_string(), false)));
	}
}
