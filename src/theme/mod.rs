//! Display-mode state: a two-value theme seeded from a persisted setting,
//! written back on every change, and applied to the root visual context.

pub mod store;

pub use store::FileSettingStore;

/// Key under which the theme is persisted.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode. Pure, no side effect.
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything unrecognized counts as absent.
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Key-value persistence for user settings. Failures are swallowed by
/// implementations: unreadable means absent, unwritable is ignored.
pub trait SettingStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The root visual context the theme is applied to.
pub trait ThemeTarget {
    /// Apply or remove the dark marker. Must be idempotent.
    fn apply_dark(&mut self, enabled: bool);
}

/// Owns the current [`ThemeMode`], its persistence, and its application to
/// the visual target.
pub struct ThemeController<S, T> {
    store: S,
    target: T,
    mode: ThemeMode,
}

impl<S: SettingStore, T: ThemeTarget> ThemeController<S, T> {
    /// Seed the mode from the store (absent or unreadable defaults to light)
    /// and immediately run the change hook so store and target agree with it.
    pub fn initialize(store: S, target: T) -> Self {
        let mode = store
            .get(THEME_KEY)
            .and_then(|v| ThemeMode::from_setting(&v))
            .unwrap_or(ThemeMode::Light);
        let mut controller = Self {
            store,
            target,
            mode,
        };
        controller.on_change();
        controller
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Flip the mode and run the change hook.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggle();
        self.on_change();
        self.mode
    }

    /// Persist the current mode and apply it to the target. Idempotent.
    fn on_change(&mut self) {
        self.store.set(THEME_KEY, self.mode.as_str());
        self.target.apply_dark(self.mode.is_dark());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore(HashMap<String, String>);

    impl SettingStore for MemStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &str) {
            self.0.insert(key.to_string(), value.to_string());
        }
    }

    /// Records every marker application so tests can observe duplicates.
    #[derive(Default)]
    struct Probe {
        dark: bool,
        applications: Vec<bool>,
    }

    impl ThemeTarget for Probe {
        fn apply_dark(&mut self, enabled: bool) {
            self.dark = enabled;
            self.applications.push(enabled);
        }
    }

    #[test]
    fn test_absent_setting_defaults_to_light() {
        let controller = ThemeController::initialize(MemStore::default(), Probe::default());
        assert_eq!(controller.mode(), ThemeMode::Light);
        assert!(!controller.target().dark);
    }

    #[test]
    fn test_unrecognized_setting_counts_as_absent() {
        let mut store = MemStore::default();
        store.set(THEME_KEY, "solarized");
        let controller = ThemeController::initialize(store, Probe::default());
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggle().toggle(), mode);
        }
    }

    #[test]
    fn test_mode_round_trips_through_a_shared_store() {
        let mut controller = ThemeController::initialize(MemStore::default(), Probe::default());
        controller.toggle();
        assert_eq!(controller.mode(), ThemeMode::Dark);

        // A fresh controller over the same store picks the persisted mode up.
        let store = controller.store;
        let reopened = ThemeController::initialize(store, Probe::default());
        assert_eq!(reopened.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_change_hook_runs_at_initialization() {
        let mut store = MemStore::default();
        store.set(THEME_KEY, "dark");
        let controller = ThemeController::initialize(store, Probe::default());
        assert!(controller.target().dark);
        assert_eq!(controller.store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_marker_application_is_idempotent() {
        let mut controller = ThemeController::initialize(MemStore::default(), Probe::default());
        controller.toggle(); // dark
        let dark_state = controller.target().dark;
        controller.toggle(); // light
        controller.toggle(); // dark again, same observable state
        assert_eq!(controller.target().dark, dark_state);
        assert!(controller.target().dark);

        controller.toggle(); // light removes the marker
        assert!(!controller.target().dark);
        // Every application recorded the intended value, never a double flip.
        assert_eq!(controller.target().applications, vec![false, true, false, true, false]);
    }
}
