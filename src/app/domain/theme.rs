use serde::{Deserialize, Serialize};

use crate::app::infrastructure::platform::SystemColorScheme;

/// The user's theme preference. `SystemDefault` follows the OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    SystemDefault,
}

/// The light/dark value actually applied, after resolving `SystemDefault`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl ThemeMode {
    /// Step to the next preference: System -> Light -> Dark -> System.
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::SystemDefault => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::SystemDefault,
        }
    }

    /// Resolve against the OS scheme. Light/Dark win outright;
    /// SystemDefault tracks whatever the host reports.
    pub fn resolve(self, system: SystemColorScheme) -> EffectiveTheme {
        match self {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::SystemDefault => {
                if system.is_dark() {
                    EffectiveTheme::Dark
                } else {
                    EffectiveTheme::Light
                }
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::SystemDefault => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

impl EffectiveTheme {
    pub fn is_dark(self) -> bool {
        matches!(self, EffectiveTheme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preference_wins() {
        assert_eq!(
            ThemeMode::Light.resolve(SystemColorScheme::Dark),
            EffectiveTheme::Light
        );
        assert_eq!(
            ThemeMode::Dark.resolve(SystemColorScheme::Light),
            EffectiveTheme::Dark
        );
    }

    #[test]
    fn test_system_default_tracks_host() {
        assert_eq!(
            ThemeMode::SystemDefault.resolve(SystemColorScheme::Light),
            EffectiveTheme::Light
        );
        assert_eq!(
            ThemeMode::SystemDefault.resolve(SystemColorScheme::Dark),
            EffectiveTheme::Dark
        );
    }

    #[test]
    fn test_host_change_re_resolves_under_system_default() {
        let mode = ThemeMode::SystemDefault;
        assert_eq!(mode.resolve(SystemColorScheme::Light), EffectiveTheme::Light);
        // The OS flips to dark while the preference stays "system".
        assert_eq!(mode.resolve(SystemColorScheme::Dark), EffectiveTheme::Dark);
    }

    #[test]
    fn test_cycle_order() {
        let start = ThemeMode::SystemDefault;
        let a = start.cycle();
        let b = a.cycle();
        let c = b.cycle();
        assert_eq!(a, ThemeMode::Light);
        assert_eq!(b, ThemeMode::Dark);
        assert_eq!(c, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ThemeMode::SystemDefault).unwrap();
        assert_eq!(json, "\"SystemDefault\"");
        let loaded: ThemeMode = serde_json::from_str("\"Dark\"").unwrap();
        assert_eq!(loaded, ThemeMode::Dark);
    }
}
