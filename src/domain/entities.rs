pub mod project;
pub mod sample_projects;
pub mod status_check;
