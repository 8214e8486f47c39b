//! Excel upload widget with drag & drop support.
//!
//! Owns one [`IntakeWidget`] and feeds it browser events; performs the
//! upload for every file the widget accepts.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::components::{ProgressSection, ResultSection, SignalView};
use crate::config::{ids, ACCEPTED_EXTENSION};
use crate::intake::IntakeWidget;
use crate::services::upload_xlsx;
use crate::types::Phase;

/// Files of a `FileList`, in order.
fn files_in(list: Option<FileList>) -> Vec<File> {
    list.map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default()
}

#[component]
pub fn IntakePanel() -> impl IntoView {
    let (view, signals) = SignalView::create();
    let widget = store_value(IntakeWidget::new(view));
    let file_input = create_node_ref::<html::Input>();

    // Envoi asynchrone, le résultat repasse par le widget
    let start_upload = move |file: File| {
        spawn_local(async move {
            let outcome = upload_xlsx(&file).await;
            widget.update_value(|w| w.finish(outcome));
        });
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        widget.with_value(|w| w.on_drag_over());
    };

    let on_drag_leave = move |_: DragEvent| {
        widget.with_value(|w| w.on_drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = files_in(ev.data_transfer().and_then(|dt| dt.files()));
        if let Some(file) = widget.try_update_value(|w| w.on_drop(files)).flatten() {
            start_upload(file);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = files_in(input.files());
        // Allow picking the same file again after a reset
        input.set_value("");
        if let Some(file) = widget.try_update_value(|w| w.on_pick(files)).flatten() {
            start_upload(file);
        }
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_download = move |_: ()| widget.with_value(|w| w.download());
    let on_reset = move |_: ()| widget.update_value(|w| w.reset());

    view! {
        <div
            class="upload-box"
            id=ids::DROP_ZONE
            class:dragover=move || signals.drop_active.get()
            style:display=move || signals.phase.get().display_for(Phase::Idle)
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
            on:click=trigger_file_input
        >
            <div class="upload-icon">"📊"</div>
            <div class="upload-text">"Excel 파일을 여기에 끌어다 놓으세요"</div>
            <div class="upload-hint">"또는 클릭하여 파일을 선택하세요 (.xlsx)"</div>
        </div>

        <input
            type="file"
            id=ids::FILE_INPUT
            accept=ACCEPTED_EXTENSION
            style="display:none"
            node_ref=file_input
            on:change=on_file_change
        />

        <ProgressSection phase=signals.phase/>

        <ResultSection
            phase=signals.phase
            notices=signals.notices
            totals=signals.totals
            on_download=on_download
            on_reset=on_reset
        />
    }
}
