//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                "업로드한 파일은 변환 후 서버에 보관되며, 같은 거래기간의 기존 데이터는 새 파일로 대체됩니다."
            </div>
            <div class="footer-links">
                <a href="/history" class="footer-link">"변환 기록"</a>
            </div>
        </footer>
    }
}
