use super::hole::Hole;
use common::Activation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub columns: usize,
    pub peeping: Vec<bool>,
    pub onbonk: Callback<Activation>,
}

/// The holes, laid out row by row starting one unit below the scoreboard.
#[function_component(Board)]
pub fn board(props: &Props) -> Html {
    let Props {
        columns,
        peeping,
        onbonk,
    } = props;
    let columns = (*columns).max(1);

    let holes = peeping.iter().enumerate().map(|(hole, &peeping)| {
        let x = (hole % columns) as f64;
        let y = (hole / columns) as f64 + 1.;
        html! {
            <Hole hole={hole} x={x} y={y} peeping={peeping} onbonk={onbonk.clone()} />
        }
    });

    html! {
        <g>
            {for holes}
        </g>
    }
}
