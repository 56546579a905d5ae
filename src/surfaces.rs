use std::cell::RefCell;
use std::rc::Rc;

/// Attribute name the root surface value is published under.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// A presentation target the controller writes plain text into. What the
/// text means (attribute value, glyph, label) is decided by the writer.
pub trait Surface {
    fn set_text(&mut self, text: &str);
}

/// Shared text cell read by the renderer and written by the controller.
///
/// The whole system runs on one thread with no suspension points (each
/// toggle is a complete synchronous transition), so `Rc<RefCell<_>>` is
/// sufficient and no lock is taken across user-visible state.
#[derive(Debug, Clone, Default)]
pub struct SharedText(Rc<RefCell<String>>);

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }
}

impl Surface for SharedText {
    fn set_text(&mut self, text: &str) {
        *self.0.borrow_mut() = text.to_string();
    }
}

/// The set of targets that must reflect the current theme at all times.
/// Icon and label targets are optional per page; a page with no mobile
/// menu simply registers no label.
pub struct SurfaceBindings {
    pub root: Box<dyn Surface>,
    pub icons: Vec<Box<dyn Surface>>,
    pub labels: Vec<Box<dyn Surface>>,
}

impl SurfaceBindings {
    pub fn new(root: impl Surface + 'static) -> Self {
        Self {
            root: Box::new(root),
            icons: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Surface + 'static) -> Self {
        self.icons.push(Box::new(icon));
        self
    }

    pub fn with_label(mut self, label: impl Surface + 'static) -> Self {
        self.labels.push(Box::new(label));
        self
    }
}

/// Off-screen assistive-technology announcement target. Created once, on
/// first use; later announcements only replace the text, which is enough to
/// re-trigger announcement in a polite live status region.
#[derive(Debug, Default)]
pub struct LiveRegion {
    text: SharedText,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> &'static str {
        "status"
    }

    pub fn politeness(&self) -> &'static str {
        "polite"
    }

    pub fn set_text(&mut self, text: &str) {
        self.text.set_text(text);
    }

    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Handle for a renderer that wants to observe announcements directly.
    #[allow(dead_code)] // renderers currently read through the controller
    pub fn handle(&self) -> SharedText {
        self.text.clone()
    }
}
