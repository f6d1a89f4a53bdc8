use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub x: f64,
    pub y: f64,
    pub font_size: String,
    #[prop_or_default]
    pub children: Children,
    pub onclick: Callback<web_sys::MouseEvent>,
}

/// SVG text button whose backdrop is sized to the rendered label.
#[function_component(Button)]
pub fn button(props: &Props) -> Html {
    let Props {
        x,
        y,
        font_size,
        children,
        onclick,
    } = props;

    let backdrop = use_state(|| None::<(f32, f32, f32, f32)>);
    let text_ref = use_node_ref();

    let cloned_backdrop = backdrop.clone();
    use_effect_with_deps(
        move |text_ref| {
            if let Some(text) = text_ref.cast::<web_sys::SvgGraphicsElement>() {
                if let Ok(rect) = text.get_b_box() {
                    let padded = (
                        rect.x() - 0.2,
                        rect.y() - 0.05,
                        rect.width() + 0.4,
                        rect.height() + 0.1,
                    );
                    if *cloned_backdrop != Some(padded) {
                        cloned_backdrop.set(Some(padded));
                    }
                }
            }
            || ()
        },
        text_ref.clone(),
    );

    let rect = backdrop.map(|(x, y, width, height)| {
        html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={width.to_string()}
                height={height.to_string()}
                rx="0.1"
                class="button" />
        }
    });

    html! {
        <>
            {for rect}
            <text
                x={x.to_string()}
                y={y.to_string()}
                font-size={font_size.clone()}
                onclick={onclick}
                class="button-label"
                dominant-baseline="middle"
                text-anchor="middle"
                ref={text_ref}>
                {for children.iter()}
            </text>
        </>
    }
}
