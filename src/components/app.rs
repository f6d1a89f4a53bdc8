use super::board::Board;
use super::button::Button;
use crate::game::{grid_size, BoardView, Session};
use common::{Activation, Bonk, GameConfig};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

fn fit_with_aspect_ratio(
    width: f64,
    height: f64,
    aspect_width: f64,
    aspect_height: f64,
) -> (f64, f64) {
    if width * aspect_height > height * aspect_width {
        (height * aspect_width / aspect_height, height)
    } else {
        (width, width * aspect_height / aspect_width)
    }
}

fn window_size() -> (f64, f64) {
    let window = web_sys::window();
    let measure = |value: Option<wasm_bindgen::JsValue>| value.and_then(|value| value.as_f64());
    let width = measure(window.as_ref().and_then(|window| window.inner_width().ok()));
    let height = measure(window.as_ref().and_then(|window| window.inner_height().ok()));
    (width.unwrap_or(480.), height.unwrap_or(640.))
}

#[function_component(App)]
pub fn app() -> Html {
    let config = GameConfig::default();
    let (columns, rows) = grid_size(config.holes);
    // One row for the scoreboard above the holes and one for the start button below.
    let (units_wide, units_high) = (columns as f64, rows as f64 + 2.);

    let view = use_reducer(|| BoardView::new(config.holes));
    let session: Rc<RefCell<Option<Session>>> = use_mut_ref(|| None);

    {
        let session = session.clone();
        let view = view.clone();
        let config = config.clone();
        use_effect_with_deps(
            move |_| {
                match Session::new(config, view) {
                    Ok(created) => *session.borrow_mut() = Some(created),
                    Err(err) => log::error!("cannot set up the game: {err}"),
                }
                || ()
            },
            (),
        );
    }

    let cloned_session = session.clone();
    let onstart = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        let session = cloned_session.borrow().clone();
        if let Some(session) = session {
            session.start();
        }
    });

    let onbonk = Callback::from(move |activation: Activation| {
        let session = session.borrow().clone();
        if let Some(session) = session {
            if let Bonk::Untrusted = session.bonk(activation) {
                log::warn!("synthetic click on hole {} ignored", activation.hole);
            }
        }
    });

    let (width, height) = window_size();
    let (width, height) = fit_with_aspect_ratio(width - 20., height - 20., units_wide, units_high);
    let view_box = format!("0 0 {units_wide} {units_high}");
    let best = view.best.map(|best| {
        html! {
            <text x={(units_wide - 0.1).to_string()} y="0.5" class="text" font-size="0.35px" dominant-baseline="middle" text-anchor="end">
                {format!("BEST: {best}")}
            </text>
        }
    });

    html! {
        <div class="app">
            <svg width={width.to_string()} height={height.to_string()} viewBox={view_box}>
                <text x="0.1" y="0.5" class="text" font-size="0.35px" dominant-baseline="middle">
                    {format!("SCORE: {}", view.score)}
                </text>
                {for best}
                <Board columns={columns} peeping={view.peeping.clone()} onbonk={onbonk} />
                <Button x={units_wide / 2.} y={units_high - 0.8} font_size="0.4px" onclick={onstart}>{"START"}</Button>
            </svg>
        </div>
    }
}
