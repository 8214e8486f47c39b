//! The intake widget: acquisition, validation, hand-off, rendering.

use crate::config::{DOWNLOAD_PREFIX, FAILURE_ALERT_PREFIX};
use crate::types::{AppError, AppResult, ConvertedStatement, Phase, TotalSlot, UploadResponse};

use super::format::format_won;
use super::state::UploadState;
use super::validate::validate_file_name;
use super::view::{IntakeView, NamedFile};

/// Download path for a generated statement. The name is not escaped.
pub fn download_href(output_filename: &str) -> String {
    format!("{}{}", DOWNLOAD_PREFIX, output_filename)
}

/// One upload widget bound to one view.
///
/// The widget never performs I/O itself. When [`on_drop`](Self::on_drop) or
/// [`on_pick`](Self::on_pick) return a file, the caller uploads it and
/// reports the outcome through [`finish`](Self::finish).
pub struct IntakeWidget<V> {
    view: V,
    state: UploadState,
}

impl<V: IntakeView> IntakeWidget<V> {
    /// Bind to `view` and show the idle phase.
    pub fn new(view: V) -> Self {
        view.show_phase(Phase::Idle);
        Self {
            view,
            state: UploadState::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    // =========================================================================
    // Input acquisition
    // =========================================================================

    pub fn on_drag_over(&self) {
        self.view.set_drop_active(true);
    }

    pub fn on_drag_leave(&self) {
        self.view.set_drop_active(false);
    }

    /// Files dropped on the drop zone. Only the first one is considered.
    pub fn on_drop<F, I>(&mut self, files: I) -> Option<F>
    where
        F: NamedFile,
        I: IntoIterator<Item = F>,
    {
        self.view.set_drop_active(false);
        self.acquire(files)
    }

    /// Files chosen in the picker. Only the first one is considered.
    pub fn on_pick<F, I>(&mut self, files: I) -> Option<F>
    where
        F: NamedFile,
        I: IntoIterator<Item = F>,
    {
        self.acquire(files)
    }

    fn acquire<F, I>(&mut self, files: I) -> Option<F>
    where
        F: NamedFile,
        I: IntoIterator<Item = F>,
    {
        let file = files.into_iter().next()?;
        let name = file.file_name();

        if self.phase() != Phase::Idle {
            log::warn!("Ignoring {} while {}", name, self.phase());
            return None;
        }

        if let Err(e) = validate_file_name(&name) {
            log::warn!("Rejected {}: {}", name, e);
            self.view.alert(e.reason());
            return None;
        }

        if let Err(e) = self.state.begin(name.as_str()) {
            log::warn!("Ignoring {}: {}", name, e);
            return None;
        }
        self.view.show_phase(Phase::InFlight);
        log::info!("📤 Uploading {}", name);

        Some(file)
    }

    // =========================================================================
    // Upload outcome
    // =========================================================================

    /// Consume the outcome of the upload started for the accepted file.
    ///
    /// Outcomes arriving when nothing is in flight are dropped.
    pub fn finish(&mut self, outcome: AppResult<UploadResponse>) {
        if self.phase() != Phase::InFlight {
            log::warn!("Dropping upload outcome received while {}", self.phase());
            return;
        }

        match outcome.and_then(UploadResponse::into_statement) {
            Ok(statement) => self.render(statement),
            Err(e) => self.fail(&e),
        }
    }

    fn render(&mut self, statement: ConvertedStatement) {
        log::info!(
            "✅ Converted into {} (record {:?})",
            statement.output_filename,
            statement.record_id
        );

        self.view.show_phase(Phase::Complete);

        if statement.updated {
            if let Some(period) = statement.result.transaction_period.as_deref() {
                log::info!("♻️  Period {} replaced by this upload", period);
                self.view.insert_update_notice(period);
            }
        }

        for slot in TotalSlot::ALL {
            self.view.set_total(slot, &format_won(slot.value_of(&statement.result)));
        }

        if let Err(e) = self.state.complete(statement) {
            log::error!("Render after state change: {}", e);
        }
    }

    fn fail(&mut self, error: &AppError) {
        log::error!("❌ Upload failed: {}", error);
        self.view
            .alert(&format!("{}{}", FAILURE_ALERT_PREFIX, error.reason()));
        self.reset();
    }

    // =========================================================================
    // Result actions
    // =========================================================================

    /// Navigate to the generated statement. No-op unless complete.
    pub fn download(&self) {
        match self.state.statement() {
            Some(statement) => self.view.navigate(&download_href(&statement.output_filename)),
            None => log::warn!("Download requested while {}", self.phase()),
        }
    }

    /// Return to the initial idle presentation.
    pub fn reset(&mut self) {
        self.state.reset();
        self.view.clear_result();
        self.view.set_drop_active(false);
        self.view.show_phase(Phase::Idle);
        log::info!("🔄 Widget reset");
    }
}
