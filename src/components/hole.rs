use common::Activation;
use yew::prelude::*;

#[derive(Clone, Properties, PartialEq)]
pub struct Props {
    pub hole: usize,
    pub x: f64,
    pub y: f64,
    pub peeping: bool,
    pub onbonk: Callback<Activation>,
}

#[function_component(Hole)]
pub fn hole(props: &Props) -> Html {
    let Props {
        hole,
        x,
        y,
        peeping,
        onbonk,
    } = props.clone();
    let cx = (x + 0.5).to_string();
    let mole_y = (y + 0.45).to_string();
    let hole_y = (y + 0.75).to_string();

    // Only the mole itself takes clicks; an empty hole is just scenery.
    let onclick = Callback::from(move |event: web_sys::MouseEvent| {
        event.prevent_default();
        onbonk.emit(Activation {
            hole,
            trusted: event.is_trusted(),
        });
    });

    html! {
        <g>
            <ellipse cx={cx.clone()} cy={hole_y} rx="0.4" ry="0.15" class="hole" />
            if peeping {
                <circle cx={cx} cy={mole_y} r="0.3" class="mole" onclick={onclick} />
            }
        </g>
    }
}
