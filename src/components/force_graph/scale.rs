//! Size and label policy for rendered nodes.

pub const MIN_RADIUS: f64 = 4.0;
pub const MAX_RADIUS: f64 = 14.0;
const RADIUS_PER_LINK: f64 = 1.5;

/// Nodes grow with their link count, within `MIN_RADIUS..=MAX_RADIUS`.
pub fn node_radius(link_count: usize) -> f64 {
	(MIN_RADIUS + RADIUS_PER_LINK * link_count as f64).min(MAX_RADIUS)
}

/// Display text for a node. Empty or blank titles show as "Untitled".
/// Truncation counts chars, not bytes.
pub fn display_label(title: &str, max_chars: usize) -> String {
	if title.trim().is_empty() {
		return "Untitled".into();
	}
	match title.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}…", &title[..cut]),
		None => title.to_string(),
	}
}
