//! Seams between the intake core and the page.

use crate::types::{Phase, TotalSlot};

/// Everything the core needs to do to the page.
///
/// Implementations own the element bindings; the core never looks anything
/// up by id. The browser implementation lives in
/// [`crate::components::SignalView`].
pub trait IntakeView {
    /// Toggle the "active drop target" indicator on the drop zone.
    fn set_drop_active(&self, active: bool);

    /// Show exactly the section belonging to `phase`.
    fn show_phase(&self, phase: Phase);

    /// Blocking, synchronous user notice.
    fn alert(&self, message: &str);

    /// Insert the "period superseded" banner ahead of the result content.
    fn insert_update_notice(&self, period: &str);

    /// Write a formatted total into its display field.
    fn set_total(&self, slot: TotalSlot, text: &str);

    /// Full-page navigation.
    fn navigate(&self, href: &str);

    /// Remove banners and blank every total.
    fn clear_result(&self);
}

/// A user-selected file, as far as the core cares.
pub trait NamedFile {
    fn file_name(&self) -> String;
}

impl NamedFile for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}
