mod nav;
mod project_card;
mod reveal;

pub use nav::Nav;
pub use project_card::ProjectCard;
pub use reveal::Reveal;
