use force_graph::SimulationParameters;

/// Tunables for [`ForceGraphCanvas`](super::ForceGraphCanvas).
#[derive(Clone, Debug, PartialEq)]
pub struct ForceGraphConfig {
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	/// Labels longer than this are cut and suffixed with an ellipsis.
	pub label_max_chars: usize,
	pub background: String,
	pub node_color: String,
	/// Fill for the currently open note.
	pub accent_color: String,
	/// `r, g, b` triple; alpha is applied per edge.
	pub edge_rgb: String,
}

impl Default for ForceGraphConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			label_max_chars: 20,
			background: "#1a1a2e".into(),
			node_color: "#8b8fa3".into(),
			accent_color: "#ff7f0e".into(),
			edge_rgb: "100, 180, 255".into(),
		}
	}
}

impl ForceGraphConfig {
	pub fn simulation(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}
