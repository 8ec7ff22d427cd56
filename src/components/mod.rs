pub mod app;
pub mod contact;
pub mod hero;
pub mod project_modal;
pub mod projects;
pub mod skills;
