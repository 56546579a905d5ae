use std::time::{Duration, Instant};

use crate::controller::{ActivationSurface, ThemeController, ToggleOutcome};
use crate::store::PreferenceStore;
use crate::surfaces::{SharedText, SurfaceBindings};
use crate::tui::theme::Palette;

/// How long the desktop control's rotation frame stays up after a toggle.
pub const SPIN_DURATION: Duration = Duration::from_millis(300);

/// UI state. Holds the controller plus read handles onto the bound surfaces
/// the renderer displays; all writes to those surfaces go through the
/// controller.
pub struct TuiApp<S: PreferenceStore> {
    pub controller: ThemeController<S>,
    pub root_attr: SharedText,
    pub desktop_icon: SharedText,
    pub mobile_icon: SharedText,
    pub mode_label: SharedText,
    pub menu_open: bool,
    pub dirty: bool,
    spin_until: Option<Instant>,
}

impl<S: PreferenceStore> TuiApp<S> {
    pub fn new(store: S) -> Self {
        let root_attr = SharedText::new();
        let desktop_icon = SharedText::new();
        let mobile_icon = SharedText::new();
        let mode_label = SharedText::new();
        let bindings = SurfaceBindings::new(root_attr.clone())
            .with_icon(desktop_icon.clone())
            .with_icon(mobile_icon.clone())
            .with_label(mode_label.clone());
        let controller = ThemeController::load(store, bindings);
        Self {
            controller,
            root_attr,
            desktop_icon,
            mobile_icon,
            mode_label,
            menu_open: false,
            dirty: true, // initial full render
            spin_until: None,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.controller.theme())
    }

    pub fn toggle_desktop(&mut self) {
        let outcome = self.controller.toggle(ActivationSurface::Desktop);
        self.after_toggle(outcome);
    }

    pub fn toggle_mobile(&mut self) {
        let outcome = self.controller.toggle(ActivationSurface::Mobile);
        self.after_toggle(outcome);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        self.dirty = true;
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            self.dirty = true;
        }
    }

    /// True while the rotation frame should still render. Expiry marks the
    /// app dirty so the control redraws in its resting state.
    pub fn spinning(&mut self) -> bool {
        match self.spin_until {
            Some(deadline) if Instant::now() < deadline => true,
            Some(_) => {
                self.spin_until = None;
                self.dirty = true;
                false
            }
            None => false,
        }
    }

    pub fn announcement(&self) -> Option<String> {
        self.controller.live_region().map(|r| r.text())
    }

    fn after_toggle(&mut self, outcome: ToggleOutcome) {
        if outcome.spin_control {
            self.spin_until = Some(Instant::now() + SPIN_DURATION);
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn desktop_toggle_spins_mobile_does_not() {
        let mut app = TuiApp::new(MemoryStore::new());
        assert!(!app.spinning());

        app.toggle_desktop();
        assert!(app.spinning());

        // Drain the spin window, then toggle from the mobile control.
        app.spin_until = Some(Instant::now() - Duration::from_millis(1));
        assert!(!app.spinning());
        app.toggle_mobile();
        assert!(!app.spinning());
    }

    #[test]
    fn both_toggle_entries_drive_the_same_surfaces() {
        let mut app = TuiApp::new(MemoryStore::new());
        assert_eq!(app.root_attr.get(), "light");
        assert_eq!(app.desktop_icon.get(), "🌙");
        assert_eq!(app.mobile_icon.get(), "🌙");

        app.toggle_mobile();
        assert_eq!(app.root_attr.get(), "dark");
        assert_eq!(app.desktop_icon.get(), "☀️");
        assert_eq!(app.mobile_icon.get(), "☀️");
        assert_eq!(app.mode_label.get(), "Dark");

        app.toggle_desktop();
        assert_eq!(app.root_attr.get(), "light");
        assert_eq!(app.mode_label.get(), "Light");
    }

    #[test]
    fn announcement_reflects_the_last_toggle() {
        let mut app = TuiApp::new(MemoryStore::new());
        assert_eq!(app.announcement(), None);
        app.toggle_desktop();
        assert_eq!(
            app.announcement().as_deref(),
            Some("Theme changed to dark mode")
        );
    }

    #[test]
    fn menu_open_close() {
        let mut app = TuiApp::new(MemoryStore::new());
        assert!(!app.menu_open);
        app.toggle_menu();
        assert!(app.menu_open);
        app.close_menu();
        assert!(!app.menu_open);
    }
}
