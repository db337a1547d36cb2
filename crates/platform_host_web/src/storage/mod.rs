//! Browser `localStorage` / `sessionStorage` adapters.

pub mod local_prefs;
pub mod session_storage;
mod web_storage;
