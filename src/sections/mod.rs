mod about;
mod contact;
mod hero;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use projects::Projects;
