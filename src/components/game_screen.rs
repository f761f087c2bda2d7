use gloo::timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use web_sys::{HtmlElement, Touch, TouchList};
use yew::prelude::*;

use super::{tile::Tile, upload_button::UploadButton, win_popup::WinPopup};
use crate::model::{celebration_schedule, Backdrop, Board, PuzzleAction, PuzzleState};
use crate::state::dom::{
    blur_active_element, tile_index_at, DRAG_IMAGE_OFFSET_PX, DRAG_PAYLOAD_MIME,
};
use crate::state::{DomGhost, Gesture, InputKind};
use crate::util::{clog, cwarn};

/// What a tile drag carries in its `DataTransfer`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct DragPayload {
    from: usize,
}

/// The entry of `list` belonging to the finger that drives the touch gesture.
fn owned_touch(gesture: &Gesture<Option<DomGhost>>, list: &TouchList) -> Option<Touch> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .find(|t| gesture.owns_touch(t.identifier()))
}

#[derive(Properties, PartialEq, Clone)]
pub struct GameScreenProps {
    pub backdrop: Backdrop,
    pub on_backdrop: Callback<AttrValue>,
}

#[function_component(GameScreen)]
pub fn game_screen(props: &GameScreenProps) -> Html {
    let puzzle = use_reducer(PuzzleState::new);
    let gesture = use_mut_ref(Gesture::<Option<DomGhost>>::default);
    // Board position currently lifted by a gesture (hidden in the grid).
    let lifted = use_state(|| None::<usize>);

    // Release any ghost still on screen when the view goes away
    {
        let gesture = gesture.clone();
        use_effect_with((), move |_| move || gesture.borrow_mut().cancel());
    }

    // Win sequence: fade, then deal a new board. Dropping the timers cancels them.
    {
        let puzzle = puzzle.clone();
        use_effect_with(puzzle.wins, move |wins| {
            let timers = (*wins > 0).then(|| {
                clog(&format!("puzzle solved (win #{wins})"));
                celebration_schedule(Board::scrambled())
                    .into_iter()
                    .map(|(delay, action)| {
                        let puzzle = puzzle.clone();
                        Timeout::new(delay, move || puzzle.dispatch(action))
                    })
                    .collect::<Vec<_>>()
            });
            move || drop(timers)
        });
    }

    // ---------------- Pointer (drag and drop) -----------------
    let on_drag_start = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        Callback::from(move |(index, e): (usize, DragEvent)| {
            let Some(tile) = e.target_dyn_into::<HtmlElement>() else {
                return;
            };
            let ghost = DomGhost::drag_image(&tile)
                .map_err(|err| cwarn(&format!("drag image unavailable: {err}")))
                .ok();
            if let Some(dt) = e.data_transfer() {
                if let Ok(json) = serde_json::to_string(&DragPayload { from: index }) {
                    let _ = dt.set_data(DRAG_PAYLOAD_MIME, &json);
                }
                let _ = dt.set_data("text/plain", &index.to_string());
                if let Some(g) = &ghost {
                    dt.set_drag_image(g.element(), DRAG_IMAGE_OFFSET_PX, DRAG_IMAGE_OFFSET_PX);
                }
            }
            gesture.borrow_mut().begin(InputKind::Pointer, index, ghost);
            lifted.set(InputKind::Pointer.hides_source().then_some(index));
        })
    };
    let on_drop = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        let puzzle = puzzle.clone();
        Callback::from(move |(index, e): (usize, DragEvent)| {
            e.prevent_default();
            let payload = e
                .data_transfer()
                .and_then(|dt| dt.get_data(DRAG_PAYLOAD_MIME).ok())
                .filter(|raw| !raw.is_empty())
                .and_then(|raw| serde_json::from_str::<DragPayload>(&raw).ok());
            if let Some(p) = payload {
                if Some(p.from) != gesture.borrow().source() {
                    clog(&format!("ignoring drop from stale drag {}", p.from));
                    return;
                }
            }
            let cmd = gesture.borrow_mut().drop_on(index);
            lifted.set(None);
            if let Some(cmd) = cmd {
                clog(&format!("swap {} <-> {}", cmd.from, cmd.to));
                puzzle.dispatch(PuzzleAction::Swap(cmd));
            }
        })
    };
    let on_drag_end = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        Callback::from(move |_: DragEvent| {
            gesture.borrow_mut().cancel();
            lifted.set(None);
            blur_active_element();
        })
    };

    // ---------------- Touch -----------------
    let on_touch_start = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        Callback::from(move |(index, e): (usize, TouchEvent)| {
            if gesture.borrow().kind() == Some(InputKind::Touch) {
                return;
            }
            let Some(touch) = e.changed_touches().item(0) else {
                return;
            };
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            let ghost = e
                .target_dyn_into::<HtmlElement>()
                .and_then(|tile| {
                    DomGhost::touch_follower(&tile, x, y)
                        .map_err(|err| cwarn(&format!("touch ghost unavailable: {err}")))
                        .ok()
                });
            gesture
                .borrow_mut()
                .begin_touch(index, touch.identifier(), ghost);
            // the source stays visible: hit-testing must still find it under the finger
            lifted.set(InputKind::Touch.hides_source().then_some(index));
        })
    };
    let on_touch_move = {
        let gesture = gesture.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = owned_touch(&gesture.borrow(), &e.changed_touches()) else {
                return;
            };
            let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
            gesture.borrow_mut().track(x, y, tile_index_at(x, y));
        })
    };
    let on_touch_end = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        let puzzle = puzzle.clone();
        Callback::from(move |e: TouchEvent| {
            // a second finger lifting leaves the gesture running
            if owned_touch(&gesture.borrow(), &e.changed_touches()).is_none() {
                return;
            }
            let (source, target) = {
                let g = gesture.borrow();
                (g.source(), g.target())
            };
            let cmd = gesture.borrow_mut().finish();
            lifted.set(None);
            match cmd {
                Some(cmd) => {
                    clog(&format!("swap {} <-> {}", cmd.from, cmd.to));
                    puzzle.dispatch(PuzzleAction::Swap(cmd));
                }
                None => clog(&format!("touch released without swap ({source:?} -> {target:?})")),
            }
        })
    };
    let on_touch_cancel = {
        let gesture = gesture.clone();
        let lifted = lifted.clone();
        Callback::from(move |e: TouchEvent| {
            if owned_touch(&gesture.borrow(), &e.changed_touches()).is_none() {
                return;
            }
            gesture.borrow_mut().cancel();
            lifted.set(None);
        })
    };

    let on_shuffle = {
        let puzzle = puzzle.clone();
        Callback::from(move |_: MouseEvent| {
            puzzle.dispatch(PuzzleAction::Reshuffle {
                board: Board::scrambled(),
            })
        })
    };

    let tiles = puzzle
        .board
        .tiles()
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            html! {
                <Tile
                    key={index}
                    {index}
                    {value}
                    backdrop={props.backdrop.clone()}
                    lifted={*lifted == Some(index)}
                    on_drag_start={on_drag_start.clone()}
                    on_drag_end={on_drag_end.clone()}
                    on_drop={on_drop.clone()}
                    on_touch_start={on_touch_start.clone()}
                    on_touch_move={on_touch_move.clone()}
                    on_touch_end={on_touch_end.clone()}
                    on_touch_cancel={on_touch_cancel.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="game-screen-wrapper" style="position:relative; width:100vw; min-height:100vh; display:flex; align-items:center; justify-content:center; background:#0e1116; color:#f0f6fc;">
            <div class="game-canvas" style="display:flex; flex-direction:column; align-items:center; gap:16px; padding:20px;">
                <h2 class="puzzle-title" style="margin:0; font-size:26px;">{"Puzzle Away!"}</h2>
                <div class="game-box" style="position:relative; z-index:0; display:flex; flex-direction:column; align-items:center; gap:12px;">
                    <div class="puzzle-grid" style="position:relative; width:min(80vw, 420px); aspect-ratio:1 / 1; background:#161b22; border:2px solid #30363d; border-radius:8px; overflow:hidden;">
                        { tiles }
                    </div>
                    <div style="display:flex; gap:12px;">
                        <button class="shuffle-button" onclick={on_shuffle}>{"Shuffle"}</button>
                        <UploadButton
                            on_image={props.on_backdrop.clone()}
                            custom={props.backdrop.is_custom()}
                        />
                    </div>
                </div>
            </div>
            <WinPopup banner={puzzle.banner} />
        </div>
    }
}
