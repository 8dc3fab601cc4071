//! Scroll state shared between the nav and the page sections.

use leptos::prelude::*;

use crate::models::section::visible_sections;
use crate::models::{is_scrolled, track_active, Section, SectionBounds};

#[derive(Clone, Copy)]
pub struct ScrollState {
    /// Section whose nav link is highlighted - read
    pub active: ReadSignal<Section>,
    set_active: WriteSignal<Section>,
    /// Page scrolled past the nav threshold - read
    pub scrolled: ReadSignal<bool>,
    set_scrolled: WriteSignal<bool>,
    /// Sections that have played their entrance transition
    revealed: RwSignal<Vec<Section>>,
}

impl ScrollState {
    pub fn new() -> Self {
        let (active, set_active) = signal(Section::Home);
        let (scrolled, set_scrolled) = signal(false);
        Self {
            active,
            set_active,
            scrolled,
            set_scrolled,
            revealed: RwSignal::new(vec![Section::Home]),
        }
    }

    /// Feed one scroll notification through the tracker. Every section that
    /// overlaps the viewport is revealed, whether or not it becomes active.
    pub fn on_scroll(&self, scroll_y: f64, viewport_height: f64, bounds: &[SectionBounds]) {
        let next = track_active(self.active.get_untracked(), scroll_y, bounds);
        if next != self.active.get_untracked() {
            self.set_active.set(next);
        }
        for section in visible_sections(scroll_y, viewport_height, bounds) {
            self.mark_revealed(section);
        }

        let scrolled = is_scrolled(scroll_y);
        if scrolled != self.scrolled.get_untracked() {
            self.set_scrolled.set(scrolled);
        }
    }

    pub fn mark_revealed(&self, section: Section) {
        if !self.revealed.with_untracked(|r| r.contains(&section)) {
            self.revealed.update(|r| r.push(section));
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.with(|r| r.contains(&section))
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_scroll_state() -> ScrollState {
    let state = ScrollState::new();
    provide_context(state);
    state
}

/// Falls back to a detached state when rendered outside `App`.
pub fn use_scroll_state() -> ScrollState {
    use_context::<ScrollState>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(Section::Home, 0.0, 800.0),
            SectionBounds::new(Section::About, 800.0, 800.0),
            SectionBounds::new(Section::Projects, 1600.0, 800.0),
            SectionBounds::new(Section::Contact, 2400.0, 800.0),
        ]
    }

    #[test]
    fn scrolling_moves_highlight_and_reveals_once() {
        let owner = Owner::new();
        owner.with(|| {
            let state = ScrollState::new();
            assert_eq!(state.active.get_untracked(), Section::Home);
            assert!(!state.revealed.with_untracked(|r| r.contains(&Section::Projects)));

            state.on_scroll(1700.0, 600.0, &layout());
            assert_eq!(state.active.get_untracked(), Section::Projects);
            assert!(state.scrolled.get_untracked());

            state.on_scroll(0.0, 600.0, &layout());
            assert_eq!(state.active.get_untracked(), Section::Home);
            assert!(!state.scrolled.get_untracked());

            // Latched after leaving
            assert!(state.revealed.with_untracked(|r| r.contains(&Section::Projects)));
            state.mark_revealed(Section::Projects);
            assert_eq!(
                state
                    .revealed
                    .with_untracked(|r| r.iter().filter(|s| **s == Section::Projects).count()),
                1
            );
        });
    }

    #[test]
    fn short_contact_is_revealed_without_becoming_active() {
        let owner = Owner::new();
        owner.with(|| {
            let bounds = vec![
                SectionBounds::new(Section::Home, 0.0, 1200.0),
                SectionBounds::new(Section::About, 1200.0, 1000.0),
                SectionBounds::new(Section::Projects, 2200.0, 1400.0),
                SectionBounds::new(Section::Contact, 3600.0, 700.0),
            ];
            let state = ScrollState::new();

            // Bottom of the page: contact + 80 px footer - 1200 px viewport
            state.on_scroll(3180.0, 1200.0, &bounds);
            assert_eq!(state.active.get_untracked(), Section::Projects);
            assert!(state.revealed.with_untracked(|r| r.contains(&Section::Contact)));
        });
    }
}
