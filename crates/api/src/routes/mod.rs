pub mod health;
pub mod registration;
pub mod static_files;
