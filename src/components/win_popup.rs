use yew::prelude::*;

use crate::model::WinBanner;

#[derive(Properties, PartialEq, Clone)]
pub struct WinPopupProps {
    pub banner: WinBanner,
}

#[function_component(WinPopup)]
pub fn win_popup(props: &WinPopupProps) -> Html {
    if !props.banner.is_visible() {
        return html! {};
    }
    let fading = props.banner == WinBanner::Fading;
    let class = classes!("win-popup", fading.then_some("fade-out"));
    html! {
        <div class="win-popup-wrapper" style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; pointer-events:none; z-index:40;">
            <div {class} style={format!(
                "background:rgba(0,0,0,0.85); border:2px solid #3fb950; color:#3fb950; padding:24px 40px; border-radius:14px; font-size:32px; font-weight:700; transition:opacity 0.6s ease; opacity:{};",
                if fading { 0 } else { 1 }
            )}>
                {"🎉 You Won!"}
            </div>
        </div>
    }
}
