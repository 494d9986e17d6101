pub mod gateway;
pub mod model;
pub mod store;
pub mod ui;
