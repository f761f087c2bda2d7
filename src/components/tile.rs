use yew::prelude::*;

use crate::model::{background_position, cell_origin, Backdrop, BLANK_TILE, GRID_SIDE};

#[derive(Properties, PartialEq, Clone)]
pub struct TileProps {
    /// Board position.
    pub index: usize,
    /// Tile value sitting at `index`.
    pub value: u8,
    pub backdrop: Backdrop,
    /// Source cell of the live gesture.
    pub lifted: bool,
    pub on_drag_start: Callback<(usize, DragEvent)>,
    pub on_drag_end: Callback<DragEvent>,
    pub on_drop: Callback<(usize, DragEvent)>,
    pub on_touch_start: Callback<(usize, TouchEvent)>,
    pub on_touch_move: Callback<TouchEvent>,
    pub on_touch_end: Callback<TouchEvent>,
    pub on_touch_cancel: Callback<TouchEvent>,
}

pub fn tile_style(index: usize, value: u8, backdrop: &Backdrop, lifted: bool) -> String {
    let (bx, by) = background_position(value);
    let (left, top) = cell_origin(index);
    let size = 100.0 / GRID_SIDE as f64;
    let span = GRID_SIDE * 100;
    format!(
        "position:absolute; left:{left:.2}%; top:{top:.2}%; width:{size:.2}%; height:{size:.2}%; \
         background-image:{}; background-size:{span}% {span}%; background-position:{bx}% {by}%; \
         box-sizing:border-box; border:1px solid rgba(255,255,255,0.35); cursor:grab; touch-action:none; \
         user-select:none; visibility:{};{}",
        backdrop.css_url(),
        if lifted { "hidden" } else { "visible" },
        if value == BLANK_TILE { " opacity:0.35;" } else { "" },
    )
}

#[function_component(Tile)]
pub fn tile(props: &TileProps) -> Html {
    let index = props.index;
    let drag_start = {
        let cb = props.on_drag_start.clone();
        Callback::from(move |e: DragEvent| cb.emit((index, e)))
    };
    let drop = {
        let cb = props.on_drop.clone();
        Callback::from(move |e: DragEvent| cb.emit((index, e)))
    };
    let touch_start = {
        let cb = props.on_touch_start.clone();
        Callback::from(move |e: TouchEvent| cb.emit((index, e)))
    };
    let drag_over = Callback::from(|e: DragEvent| e.prevent_default());
    let class = classes!("tile", (props.value == BLANK_TILE).then_some("empty"));
    html! {
        <div
            {class}
            // keep in sync with state::dom::TILE_INDEX_ATTR
            data-tile-index={index.to_string()}
            tabindex="-1"
            draggable="true"
            style={tile_style(index, props.value, &props.backdrop, props.lifted)}
            ondragstart={drag_start}
            ondragend={props.on_drag_end.clone()}
            ondragover={drag_over}
            ondrop={drop}
            ontouchstart={touch_start}
            ontouchmove={props.on_touch_move.clone()}
            ontouchend={props.on_touch_end.clone()}
            ontouchcancel={props.on_touch_cancel.clone()}
        />
    }
}
