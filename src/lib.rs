pub mod constants;
pub mod fibonacci;
pub mod format;
