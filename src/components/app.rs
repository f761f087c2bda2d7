use super::{game_screen::GameScreen, landing::Landing};
use crate::model::Backdrop;
use crate::util::clog;
use yew::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
enum View {
    Home,
    Game,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Home);
    // Shared by every tile; replaced when the player uploads a picture
    let backdrop = use_state(Backdrop::default);

    let to_game = {
        let view = view.clone();
        Callback::from(move |_| {
            if *view != View::Game {
                clog("view: home -> game");
                view.set(View::Game);
            }
        })
    };
    let set_backdrop = {
        let backdrop = backdrop.clone();
        Callback::from(move |src: AttrValue| {
            clog(&format!("background replaced ({} chars)", src.len()));
            backdrop.set(Backdrop::new(src));
        })
    };

    match *view {
        View::Home => html! { <Landing on_start={to_game} /> },
        View::Game => html! { <GameScreen
            backdrop={(*backdrop).clone()}
            on_backdrop={set_backdrop}
        /> },
    }
}
