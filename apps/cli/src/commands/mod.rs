pub mod create;
pub mod pending;
pub mod summary;
