//! Preferences domain module.
//!
//! Favorites, recently used tools and the theme, each behind its own store
//! with load-at-open and explicit mutation entry points. Nothing outside
//! this module touches the storage primitive.
//!
//! Persistence is best effort. A record that cannot be parsed is treated as
//! empty, and a store whose write fails keeps working in memory for the
//! rest of the session.

mod error;
mod favorites;
mod list;
mod recents;
mod service;
pub mod storage;
mod theme;

pub use error::PreferenceError;
pub use favorites::{FavoritesStore, MAX_FAVORITES, ToggleOutcome};
pub use recents::{MAX_RECENTS, RecentsStore};
pub use service::{PreferenceService, PreferenceSnapshot};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use theme::{Theme, ThemeStore};
