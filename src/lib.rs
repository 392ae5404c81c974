pub mod editor;
pub mod models;
pub mod panel;
pub mod security;
pub mod session;
pub mod storage;
pub mod store;
pub mod sync;
