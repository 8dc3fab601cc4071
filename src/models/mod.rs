pub mod category;
pub mod contact;
pub mod profile;
pub mod project;
pub mod section;

pub use category::{filter_by_key, filter_projects, Category};
pub use contact::{ContactError, ContactForm};
pub use project::{Project, PROJECTS};
pub use section::{is_scrolled, track_active, Section, SectionBounds};
