pub mod hardware;
pub mod version;
