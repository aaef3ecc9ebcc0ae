//! Core infrastructure: session file location and persistence.

pub mod session;

pub use session::{
    default_session_path, load_snapshot, load_store, save_snapshot, save_store,
    try_read_to_string, write_string,
};
