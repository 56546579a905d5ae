use tracing::{debug, warn};

use crate::store::{PreferenceStore, THEME_KEY};
use crate::surfaces::{LiveRegion, SurfaceBindings};
use crate::theme::Theme;

/// Which physical control triggered a toggle. Only used to decide whether
/// the caller should play the rotation micro-animation; the logical
/// transition is identical for every surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSurface {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub theme: Theme,
    /// Play the 300ms rotation on the invoking control.
    pub spin_control: bool,
}

/// Single source of truth for the active theme. Owns the persisted
/// preference and keeps every bound surface consistent with the current
/// value; no surface is ever observable mid-transition because apply,
/// persist and announce happen inside one synchronous call.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    surfaces: SurfaceBindings,
    current: Theme,
    live_region: Option<LiveRegion>,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the persisted preference (absent or invalid values default to
    /// light) and apply it to every bound surface. The initial application
    /// is silent: no live region exists until the first toggle.
    pub fn load(store: S, surfaces: SurfaceBindings) -> Self {
        let current = store
            .read(THEME_KEY)
            .and_then(|v| v.parse::<Theme>().ok())
            .unwrap_or(Theme::Light);
        debug!(theme = %current, "resolved persisted theme");
        let mut controller = Self {
            store,
            surfaces,
            current,
            live_region: None,
        };
        controller.apply_theme(current);
        controller
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    /// Flip the theme, push it to every surface, persist it and announce it.
    /// Persistence failure is non-fatal: the in-memory theme stays
    /// authoritative for the rest of the session.
    pub fn toggle(&mut self, surface: ActivationSurface) -> ToggleOutcome {
        let next = self.current.toggle();
        self.apply_theme(next);
        self.current = next;
        if let Err(e) = self.store.write(THEME_KEY, next.as_str()) {
            warn!(error = %e, theme = %next, "persisting theme preference failed");
        }
        self.announce(&next.announcement());
        ToggleOutcome {
            theme: next,
            spin_control: surface == ActivationSurface::Desktop,
        }
    }

    /// Announcement target, present only after the first toggle.
    pub fn live_region(&self) -> Option<&LiveRegion> {
        self.live_region.as_ref()
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.surfaces.root.set_text(theme.as_str());
        for icon in &mut self.surfaces.icons {
            icon.set_text(theme.action_glyph());
        }
        for label in &mut self.surfaces.labels {
            label.set_text(theme.label());
        }
    }

    fn announce(&mut self, message: &str) {
        self.live_region
            .get_or_insert_with(LiveRegion::new)
            .set_text(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use crate::surfaces::SharedText;

    struct Harness {
        root: SharedText,
        desktop_icon: SharedText,
        mobile_icon: SharedText,
        label: SharedText,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                root: SharedText::new(),
                desktop_icon: SharedText::new(),
                mobile_icon: SharedText::new(),
                label: SharedText::new(),
            }
        }

        fn bindings(&self) -> SurfaceBindings {
            SurfaceBindings::new(self.root.clone())
                .with_icon(self.desktop_icon.clone())
                .with_icon(self.mobile_icon.clone())
                .with_label(self.label.clone())
        }
    }

    /// Store whose writes always fail, for the quota-exceeded path.
    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("store disabled")))
        }
    }

    #[test]
    fn load_defaults_to_light_unless_stored_value_is_exactly_dark() {
        let cases = [
            (None, Theme::Light),
            (Some("light"), Theme::Light),
            (Some("dark"), Theme::Dark),
            (Some("garbage"), Theme::Light),
            (Some("Dark"), Theme::Light),
        ];
        for (stored, expected) in cases {
            let store = match stored {
                Some(v) => MemoryStore::with(THEME_KEY, v),
                None => MemoryStore::new(),
            };
            let h = Harness::new();
            let controller = ThemeController::load(store, h.bindings());
            assert_eq!(controller.theme(), expected, "stored {stored:?}");
            assert_eq!(h.root.get(), expected.as_str());
        }
    }

    #[test]
    fn load_is_silent() {
        let h = Harness::new();
        let controller = ThemeController::load(MemoryStore::new(), h.bindings());
        assert!(controller.live_region().is_none());
    }

    #[test]
    fn toggle_alternates_with_no_third_state() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.toggle(ActivationSurface::Desktop).theme, Theme::Dark);
        assert_eq!(controller.toggle(ActivationSurface::Desktop).theme, Theme::Light);
        assert_eq!(controller.toggle(ActivationSurface::Desktop).theme, Theme::Dark);
    }

    #[test]
    fn all_icon_surfaces_agree_after_every_transition() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());

        // Light: both icons offer the dark mode.
        assert_eq!(h.desktop_icon.get(), "🌙");
        assert_eq!(h.mobile_icon.get(), "🌙");
        assert_eq!(h.label.get(), "Light");

        controller.toggle(ActivationSurface::Mobile);
        assert_eq!(h.desktop_icon.get(), "☀️");
        assert_eq!(h.mobile_icon.get(), "☀️");
        assert_eq!(h.label.get(), "Dark");
        assert_eq!(h.root.get(), "dark");
    }

    #[test]
    fn toggle_persists_and_a_fresh_load_round_trips() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());
        controller.toggle(ActivationSurface::Desktop);

        let ThemeController { store, .. } = controller;
        assert_eq!(store.read(THEME_KEY), Some("dark".to_string()));

        // Fresh page context over the same store.
        let h2 = Harness::new();
        let reloaded = ThemeController::load(store, h2.bindings());
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert_eq!(h2.root.get(), "dark");
    }

    #[test]
    fn announcement_text_matches_the_contract_exactly() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());

        controller.toggle(ActivationSurface::Desktop);
        let region = controller.live_region().expect("created on first toggle");
        assert_eq!(region.text(), "Theme changed to dark mode");
        assert_eq!(region.role(), "status");
        assert_eq!(region.politeness(), "polite");
        let handle = region.handle();

        controller.toggle(ActivationSurface::Mobile);
        // Same region instance, text replaced.
        assert_eq!(handle.get(), "Theme changed to light mode");
    }

    #[test]
    fn empty_store_scenario_end_to_end() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());
        assert_eq!(h.root.get(), "light");

        controller.toggle(ActivationSurface::Desktop);
        assert_eq!(h.root.get(), "dark");
        assert_eq!(
            controller.live_region().unwrap().text(),
            "Theme changed to dark mode"
        );

        controller.toggle(ActivationSurface::Desktop);
        assert_eq!(h.root.get(), "light");
        assert_eq!(
            controller.live_region().unwrap().text(),
            "Theme changed to light mode"
        );
    }

    #[test]
    fn persistence_failure_does_not_break_the_session() {
        let h = Harness::new();
        let mut controller = ThemeController::load(FailingStore, h.bindings());

        let outcome = controller.toggle(ActivationSurface::Desktop);
        assert_eq!(outcome.theme, Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(h.root.get(), "dark");
        assert_eq!(
            controller.live_region().unwrap().text(),
            "Theme changed to dark mode"
        );
    }

    #[test]
    fn only_the_desktop_surface_requests_the_rotation() {
        let h = Harness::new();
        let mut controller = ThemeController::load(MemoryStore::new(), h.bindings());
        assert!(controller.toggle(ActivationSurface::Desktop).spin_control);
        assert!(!controller.toggle(ActivationSurface::Mobile).spin_control);
    }

    #[test]
    fn missing_optional_surfaces_are_skipped() {
        let root = SharedText::new();
        // No icons, no labels bound on this page.
        let mut controller =
            ThemeController::load(MemoryStore::new(), SurfaceBindings::new(root.clone()));
        controller.toggle(ActivationSurface::Mobile);
        assert_eq!(root.get(), "dark");
    }
}
