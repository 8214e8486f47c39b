//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"손익계산서 자동 생성"</h1>
            <p class="subtitle">
                "판매 내역 Excel 파일(.xlsx)을 업로드하면 "
                "매출, 원가, 매출총이익, 입금 합계를 계산한 손익계산서를 만들어 드립니다."
            </p>
        </div>
    }
}
