pub mod append;
pub mod initialize;
pub mod insert_after;
pub mod remove;
