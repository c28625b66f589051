pub mod draft;
pub mod stock;
pub mod summary;
