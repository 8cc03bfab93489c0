pub mod projects;
pub mod status;
