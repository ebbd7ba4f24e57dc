//! Scroll thresholds and nav highlighting, kept free of DOM access.

/// Navbar switches to its compact style past this offset.
pub const NAVBAR_COMPACT_AT: f64 = 50.0;
/// The scroll-to-top button appears past this offset.
pub const SCROLL_TOP_VISIBLE_AT: f64 = 300.0;
/// Distance below the viewport top used to pick the active section.
pub const ACTIVE_SECTION_OFFSET: f64 = 120.0;
/// Space left above a section when jumping to it, for the fixed navbar.
pub const ANCHOR_OFFSET: f64 = 90.0;

/// Vertical extent of a page section, in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section whose extent contains `scroll_y + ACTIVE_SECTION_OFFSET`. When
/// sections overlap the one later in document order wins.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<&str> {
    let marker = scroll_y + ACTIVE_SECTION_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(marker))
        .map(|s| s.id.as_str())
}

pub fn anchor_target(section_top: f64) -> f64 {
    (section_top - ANCHOR_OFFSET).max(0.0)
}

pub fn navbar_compact(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_COMPACT_AT
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds { id: "home".into(), top: 0.0, height: 700.0 },
            SectionBounds { id: "predict".into(), top: 700.0, height: 1200.0 },
            SectionBounds { id: "history".into(), top: 1900.0, height: 600.0 },
        ]
    }

    #[test]
    fn test_active_section_uses_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("home"));
        assert_eq!(active_section(579.0, &s), Some("home"));
        assert_eq!(active_section(580.0, &s), Some("predict"));
        assert_eq!(active_section(1800.0, &s), Some("history"));
    }

    #[test]
    fn test_active_section_past_end() {
        assert_eq!(active_section(5000.0, &sections()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn test_overlapping_sections_prefer_later() {
        let s = vec![
            SectionBounds { id: "predict".into(), top: 0.0, height: 1000.0 },
            SectionBounds { id: "results".into(), top: 400.0, height: 300.0 },
        ];
        assert_eq!(active_section(300.0, &s), Some("results"));
    }

    #[test]
    fn test_thresholds() {
        assert!(!navbar_compact(50.0));
        assert!(navbar_compact(50.5));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
        assert_eq!(anchor_target(700.0), 610.0);
        assert_eq!(anchor_target(40.0), 0.0);
    }
}
