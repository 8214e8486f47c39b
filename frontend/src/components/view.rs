//! Browser binding of [`IntakeView`] backed by Leptos signals.

use leptos::*;

use crate::intake::IntakeView;
use crate::types::{Phase, TotalSlot};

/// Reactive state read by the intake markup.
#[derive(Clone, Copy)]
pub struct IntakeSignals {
    pub drop_active: ReadSignal<bool>,
    pub phase: ReadSignal<Phase>,
    pub notices: ReadSignal<Vec<String>>,
    pub totals: ReadSignal<[String; 4]>,
}

/// Writes side of [`IntakeSignals`], plus window access for alerts and
/// navigation.
#[derive(Clone, Copy)]
pub struct SignalView {
    set_drop_active: WriteSignal<bool>,
    set_phase: WriteSignal<Phase>,
    set_notices: WriteSignal<Vec<String>>,
    set_totals: WriteSignal<[String; 4]>,
}

impl SignalView {
    /// Create the signals for one widget instance.
    pub fn create() -> (Self, IntakeSignals) {
        let (drop_active, set_drop_active) = create_signal(false);
        let (phase, set_phase) = create_signal(Phase::Idle);
        let (notices, set_notices) = create_signal(Vec::<String>::new());
        let (totals, set_totals) = create_signal(<[String; 4]>::default());

        (
            Self {
                set_drop_active,
                set_phase,
                set_notices,
                set_totals,
            },
            IntakeSignals {
                drop_active,
                phase,
                notices,
                totals,
            },
        )
    }
}

impl IntakeView for SignalView {
    fn set_drop_active(&self, active: bool) {
        self.set_drop_active.set(active);
    }

    fn show_phase(&self, phase: Phase) {
        self.set_phase.set(phase);
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert() failed: {:?}", e);
        }
    }

    fn insert_update_notice(&self, period: &str) {
        self.set_notices.update(|notices| notices.insert(0, period.to_string()));
    }

    fn set_total(&self, slot: TotalSlot, text: &str) {
        self.set_totals.update(|totals| totals[slot.index()] = text.to_string());
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to navigate to {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::error!("Navigation to {} failed: {:?}", href, e);
        }
    }

    fn clear_result(&self) {
        self.set_notices.set(Vec::new());
        self.set_totals.set(Default::default());
    }
}
