pub mod in_memory;
pub mod mongo_repo;
pub mod project;
pub mod status_check;
