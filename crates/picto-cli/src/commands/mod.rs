pub mod diagram;
pub mod schema;
pub mod show;
