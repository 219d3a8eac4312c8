//! Theme store.
//!
//! The appearance preference, persisted as a bare string under
//! [`THEME_KEY`]. Same recovery rules as the id-list stores: anything
//! unreadable falls back to the configured default, and a failed write
//! leaves the theme in memory for the rest of the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::error::PreferenceError;
use super::storage::{PreferenceStorage, THEME_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

pub struct ThemeStore {
    storage: Arc<dyn PreferenceStorage>,
    degraded: bool,
    theme: Theme,
    tx: watch::Sender<Theme>,
}

impl ThemeStore {
    /// Open the store, falling back to `default` when nothing usable is stored.
    pub fn open(storage: Arc<dyn PreferenceStorage>, default: Theme) -> Self {
        let (theme, degraded) = match storage.read(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => (theme, false),
                Err(e) => {
                    warn!("{}; using {}", e, default);
                    (default, false)
                }
            },
            Ok(None) => (default, false),
            Err(e @ PreferenceError::Malformed { .. }) => {
                warn!("{}; using {}", e, default);
                (default, false)
            }
            Err(e) => {
                warn!("Could not read theme, keeping it in memory only: {}", e);
                (default, true)
            }
        };
        debug!("Loaded theme: {}", theme);

        let (tx, _) = watch::channel(theme);
        Self {
            storage,
            degraded,
            theme,
            tx,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the other theme and return it.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.opposite());
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        info!("Theme set to {}", theme);

        if self.degraded {
            debug!("Skipping theme write: storage unavailable");
        } else if let Err(e) = self.storage.write(THEME_KEY, theme.as_str()) {
            warn!("Could not persist theme, keeping it in memory only: {}", e);
            self.degraded = true;
        }

        self.tx.send_replace(theme);
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.tx.subscribe()
    }
}
