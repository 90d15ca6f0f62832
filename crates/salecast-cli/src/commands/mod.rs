pub mod interactive;
pub mod list;
pub mod predict;
