pub mod export;
pub mod import;
pub mod remove;
pub mod set;
pub mod show;
