/// Lookahead added to the scroll offset so the fixed header does not hide
/// the section being reported.
pub const LOOKAHEAD_OFFSET: f64 = 100.0;

/// Scroll offset past which the nav switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// One of the scroll-anchored regions of the page, in scroll priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the anchoring element.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

/// Measured vertical extent of a mounted section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(section: Section, top: f64, height: f64) -> Self {
        Self {
            section,
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// First section (in the given order) whose extent contains the lookahead point.
pub fn active_section(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let point = scroll_y + LOOKAHEAD_OFFSET;
    bounds.iter().find(|b| b.contains(point)).map(|b| b.section)
}

/// Section to highlight after a scroll to `scroll_y`.
///
/// Falls back to the last measured section once the lookahead point has run
/// past its bottom, and to `previous` when it sits above the first section
/// or in a gap between two.
pub fn track_active(previous: Section, scroll_y: f64, bounds: &[SectionBounds]) -> Section {
    if let Some(section) = active_section(scroll_y, bounds) {
        return section;
    }
    match bounds.last() {
        Some(last) if scroll_y + LOOKAHEAD_OFFSET >= last.bottom() => last.section,
        _ => previous,
    }
}

/// Sections that overlap the viewport `[scroll_y, scroll_y + viewport_height)`.
pub fn visible_sections(
    scroll_y: f64,
    viewport_height: f64,
    bounds: &[SectionBounds],
) -> impl Iterator<Item = Section> + '_ {
    let viewport_bottom = scroll_y + viewport_height;
    bounds
        .iter()
        .filter(move |b| b.top < viewport_bottom && b.bottom() > scroll_y)
        .map(|b| b.section)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hero 0..800, about 800..1700, projects 1700..3000, contact 3000..3600
    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(Section::Home, 0.0, 800.0),
            SectionBounds::new(Section::About, 800.0, 900.0),
            SectionBounds::new(Section::Projects, 1700.0, 1300.0),
            SectionBounds::new(Section::Contact, 3000.0, 600.0),
        ]
    }

    #[test]
    fn point_inside_each_section_reports_it() {
        let bounds = layout();
        for b in &bounds {
            let inside = b.top + b.height / 2.0 - LOOKAHEAD_OFFSET;
            assert_eq!(track_active(Section::Home, inside, &bounds), b.section);
            assert_eq!(
                track_active(Section::Home, b.top - LOOKAHEAD_OFFSET, &bounds),
                b.section,
                "top edge is inclusive"
            );
        }
    }

    #[test]
    fn bottom_edge_belongs_to_next_section() {
        let bounds = layout();
        assert_eq!(
            active_section(800.0 - LOOKAHEAD_OFFSET, &bounds),
            Some(Section::About)
        );
    }

    #[test]
    fn above_first_section_keeps_previous() {
        let bounds = vec![
            SectionBounds::new(Section::Home, 400.0, 800.0),
            SectionBounds::new(Section::About, 1200.0, 900.0),
        ];
        for scroll_y in [0.0, 100.0, 299.0] {
            assert_eq!(active_section(scroll_y, &bounds), None);
            assert_eq!(
                track_active(Section::About, scroll_y, &bounds),
                Section::About
            );
        }
    }

    #[test]
    fn gap_between_sections_keeps_previous() {
        let bounds = vec![
            SectionBounds::new(Section::Home, 0.0, 500.0),
            SectionBounds::new(Section::About, 700.0, 500.0),
        ];
        assert_eq!(track_active(Section::Home, 450.0, &bounds), Section::Home);
    }

    #[test]
    fn past_last_section_stays_on_last() {
        let bounds = layout();
        assert_eq!(
            track_active(Section::Projects, 10_000.0, &bounds),
            Section::Contact
        );
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let bounds = vec![
            SectionBounds::new(Section::Home, 0.0, 800.0),
            SectionBounds::new(Section::Projects, 800.0, 1000.0),
        ];
        assert_eq!(
            track_active(Section::Home, 900.0, &bounds),
            Section::Projects
        );
    }

    #[test]
    fn no_bounds_keeps_previous() {
        assert_eq!(track_active(Section::About, 1234.0, &[]), Section::About);
    }

    #[test]
    fn scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn visible_sections_overlap_the_viewport() {
        let bounds = layout();
        let at_top: Vec<_> = visible_sections(0.0, 1000.0, &bounds).collect();
        assert_eq!(at_top, vec![Section::Home, Section::About]);

        // Touching edges do not count
        let exact: Vec<_> = visible_sections(800.0, 900.0, &bounds).collect();
        assert_eq!(exact, vec![Section::About]);
    }

    #[test]
    fn short_last_section_is_visible_but_never_active() {
        // Contact plus footer is shorter than the viewport, so the page
        // cannot scroll far enough for the lookahead point to enter it.
        let bounds = vec![
            SectionBounds::new(Section::Home, 0.0, 1200.0),
            SectionBounds::new(Section::About, 1200.0, 1000.0),
            SectionBounds::new(Section::Projects, 2200.0, 1400.0),
            SectionBounds::new(Section::Contact, 3600.0, 700.0),
        ];
        let viewport = 1200.0;
        let max_scroll = 3600.0 + 700.0 + 80.0 - viewport;

        let mut active = Section::Home;
        let mut seen_contact = false;
        let mut y = 0.0;
        while y <= max_scroll {
            active = track_active(active, y, &bounds);
            seen_contact |= visible_sections(y, viewport, &bounds).any(|s| s == Section::Contact);
            y += 10.0;
        }
        assert_ne!(active, Section::Contact);
        assert!(seen_contact);
    }
}
