pub mod about;
pub mod contact;
pub mod experience;
pub mod projects;
pub mod skills;
pub mod window_body;

pub use about::AboutView;
pub use contact::ContactView;
pub use experience::ExperienceView;
pub use projects::ProjectsView;
pub use skills::SkillsView;
pub use window_body::WindowBody;
