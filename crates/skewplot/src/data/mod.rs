//! Configuration files in the data directory.

pub mod keybindings_data;
pub mod settings_data;
pub mod storage;
