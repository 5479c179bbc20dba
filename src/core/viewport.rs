use indexmap::IndexSet;

/// Fixed page header height subtracted from scroll targets.
pub const NAV_HEADER_OFFSET: f64 = 80.0;
/// A card is revealed once its top edge is this close to entering the
/// viewport from below.
pub const REVEAL_MARGIN: f64 = 150.0;
/// Distance from the viewport top inside which a section counts as active.
pub const ACTIVE_SECTION_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    /// Viewport-relative top of the section's bounding box.
    pub top: f64,
    pub height: f64,
}

/// Geometry captured by the bindings layer when a scroll (or the initial
/// ready) event fires. Cards and sections are listed in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub viewport_height: f64,
    pub card_tops: Vec<f64>,
    pub sections: Vec<SectionMetrics>,
}

/// Indices of cards that are in reveal range and not yet revealed.
pub fn cards_entering(snapshot: &ViewportSnapshot, revealed: &IndexSet<usize>) -> Vec<usize> {
    snapshot
        .card_tops
        .iter()
        .enumerate()
        .filter(|(index, top)| {
            **top < snapshot.viewport_height - REVEAL_MARGIN && !revealed.contains(index)
        })
        .map(|(index, _)| index)
        .collect()
}

/// The single active section: the last one in document order whose top is
/// at or above the threshold line and whose bottom extends past it.
pub fn active_section(snapshot: &ViewportSnapshot) -> Option<&str> {
    let mut current = None;
    for section in &snapshot.sections {
        if section.top <= ACTIVE_SECTION_THRESHOLD
            && section.top + section.height > ACTIVE_SECTION_THRESHOLD
        {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Absolute scroll position for an in-page navigation target.
pub fn scroll_target(section_offset: f64) -> f64 {
    (section_offset - NAV_HEADER_OFFSET).max(0.0)
}
