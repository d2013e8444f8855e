pub mod show;
pub mod show_manager;
