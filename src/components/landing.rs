use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LandingProps {
    pub on_start: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let start_click = {
        let cb = props.on_start.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let start_touch = {
        let cb = props.on_start.clone();
        Callback::from(move |_: TouchEvent| cb.emit(()))
    };
    html! {
        <div class="landing" style="position:relative; width:100vw; height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116 url('/assets/background.png') center/cover no-repeat;">
            <div class="overlay" style="display:flex; flex-direction:column; align-items:center; gap:24px; padding:32px 40px; background:rgba(0,0,0,0.6); border-radius:14px;">
                <h1 style="margin:0; font-size:32px; color:#f0f6fc; text-align:center;">{"🧩Welcome to Puzzle Mania!"}</h1>
                <img
                    src="/assets/btnPlay.png"
                    alt="Play Button"
                    class="play-button"
                    style="width:160px; cursor:pointer;"
                    onclick={start_click}
                    ontouchstart={start_touch}
                />
            </div>
        </div>
    }
}
