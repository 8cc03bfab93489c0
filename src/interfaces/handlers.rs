pub mod home;
pub mod projects;
pub mod status;
pub mod system;
