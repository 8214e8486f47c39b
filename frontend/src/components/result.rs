//! Result panel: update banner, the four totals, and the download control.

use leptos::*;

use crate::config::ids;
use crate::types::{Phase, TotalSlot};

#[component]
pub fn ResultSection(
    phase: ReadSignal<Phase>,
    notices: ReadSignal<Vec<String>>,
    totals: ReadSignal<[String; 4]>,
    /// Download control handler
    #[prop(into)]
    on_download: Callback<()>,
    /// "Start over" handler
    #[prop(into)]
    on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="result-section"
            id=ids::RESULT
            style:display=move || phase.get().display_for(Phase::Complete)
        >
            {move || {
                notices
                    .get()
                    .into_iter()
                    .map(|period| view! {
                        <div class="update-notice">
                            "✓ "
                            <strong>{format!("거래기간 \"{}\"", period)}</strong>
                            "의 기존 데이터가 새로운 파일로 갱신되었습니다."
                        </div>
                    })
                    .collect_view()
            }}

            <h2>"손익계산서 요약"</h2>
            <div class="summary-grid">
                {TotalSlot::ALL
                    .into_iter()
                    .map(|slot| view! {
                        <div class="summary-item">
                            <div class="summary-label">{slot.label()}</div>
                            <div class="summary-value" id=slot.element_id()>
                                {move || totals.with(|t| t[slot.index()].clone())}
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button
                class="download-button"
                id=ids::DOWNLOAD_BUTTON
                on:click=move |_| on_download.call(())
            >
                "손익계산서 다운로드"
            </button>
            <button
                class="reset-button"
                id=ids::RESET_BUTTON
                on:click=move |_| on_reset.call(())
            >
                "다른 파일 변환하기"
            </button>
        </div>
    }
}
