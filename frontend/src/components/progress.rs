use leptos::*;
use crate::config::ids;
use crate::types::Phase;

#[component]
pub fn ProgressSection(phase: ReadSignal<Phase>) -> impl IntoView {
    view! {
        <div
            class="progress-section"
            id=ids::PROGRESS
            style:display=move || phase.get().display_for(Phase::InFlight)
        >
            <div class="spinner"></div>
            <div class="progress-text">"파일을 변환하는 중입니다..."</div>
        </div>
    }
}
