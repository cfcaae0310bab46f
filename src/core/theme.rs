//! Theme preference – dark or light, with an explicit persisted override.
//!
//! Resolution order at startup: a persisted override wins; otherwise the
//! terminal's detected scheme. Toggling creates the override, and from then
//! on scheme changes reported by the environment are ignored.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub fn flip(self) -> Self {
        match self {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            _ => None,
        }
    }

    /// Toggle glyph, derived from the mode so the two stay in sync.
    pub fn icon(self) -> &'static str {
        match self {
            Mode::Light => "☀",
            Mode::Dark => "☾",
        }
    }
}

#[derive(Debug)]
pub struct ThemeState {
    mode: Mode,
    /// Set once the user has ever chosen explicitly.
    overridden: bool,
}

impl ThemeState {
    /// `persisted` is the saved override, if any; `system` the detected
    /// terminal scheme.
    pub fn new(persisted: Option<Mode>, system: Mode) -> Self {
        match persisted {
            Some(mode) => Self { mode, overridden: true },
            None => Self { mode: system, overridden: false },
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Flip the mode and mark it an explicit choice. The caller persists the
    /// returned mode.
    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.flip();
        self.overridden = true;
        self.mode
    }

    /// The terminal scheme changed. Applies only while no override exists.
    /// Terminals deliver no live scheme-change event, so at runtime the
    /// scheme is only ever sampled once, at startup.
    #[allow(dead_code)]
    pub fn system_changed(&mut self, system: Mode) {
        if !self.overridden {
            self.mode = system;
        }
    }
}

/// Detect the terminal's scheme from `COLORFGBG` (set by many emulators to
/// `<fg>;<bg>` palette indices). Unknown means dark.
pub fn detect_system_mode() -> Mode {
    from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

fn from_colorfgbg(raw: Option<&str>) -> Mode {
    let Some(raw) = raw else {
        return Mode::Dark;
    };
    let Some(bg) = raw
        .rsplit(';')
        .next()
        .and_then(|part| part.trim().parse::<u8>().ok())
    else {
        return Mode::Dark;
    };
    // 7 and 15 are the light backgrounds of the 16-colour palette.
    if bg == 7 || bg == 15 {
        Mode::Light
    } else {
        Mode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_override_beats_the_system_scheme() {
        let theme = ThemeState::new(Some(Mode::Light), Mode::Dark);
        assert_eq!(theme.mode(), Mode::Light);
    }

    #[test]
    fn without_an_override_the_system_scheme_applies() {
        let theme = ThemeState::new(None, Mode::Light);
        assert_eq!(theme.mode(), Mode::Light);
    }

    #[test]
    fn system_changes_apply_until_the_user_toggles() {
        let mut theme = ThemeState::new(None, Mode::Dark);
        theme.system_changed(Mode::Light);
        assert_eq!(theme.mode(), Mode::Light);

        theme.toggle();
        assert_eq!(theme.mode(), Mode::Dark);

        // Explicitly chosen: later scheme changes no longer apply.
        theme.system_changed(Mode::Light);
        assert_eq!(theme.mode(), Mode::Dark);
    }

    #[test]
    fn a_loaded_override_also_blocks_system_changes() {
        let mut theme = ThemeState::new(Some(Mode::Dark), Mode::Dark);
        theme.system_changed(Mode::Light);
        assert_eq!(theme.mode(), Mode::Dark);
    }

    #[test]
    fn colorfgbg_detection() {
        assert_eq!(from_colorfgbg(Some("0;15")), Mode::Light);
        assert_eq!(from_colorfgbg(Some("15;0")), Mode::Dark);
        assert_eq!(from_colorfgbg(Some("12;8")), Mode::Dark);
        assert_eq!(from_colorfgbg(Some("0;7")), Mode::Light);
        assert_eq!(from_colorfgbg(Some("default;default")), Mode::Dark);
        assert_eq!(from_colorfgbg(None), Mode::Dark);
    }

    #[test]
    fn mode_round_trips_through_its_string_form() {
        assert_eq!(Mode::parse(Mode::Light.as_str()), Some(Mode::Light));
        assert_eq!(Mode::parse(Mode::Dark.as_str()), Some(Mode::Dark));
        assert_eq!(Mode::parse("solarized"), None);
    }

    #[test]
    fn icons_differ_per_mode() {
        assert_ne!(Mode::Light.icon(), Mode::Dark.icon());
    }
}
