pub mod consistency_check;
pub mod projects;
