use yew::prelude::*;

use crate::hooks::use_parallax;

#[derive(Properties, PartialEq)]
pub struct ParallaxImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// 0 disables the effect; typical values are 0.3 to 0.5.
    #[prop_or(0.3)]
    pub speed: f64,
}

/// Image whose vertical offset tracks the scroll position scaled by `speed`.
/// The offset is purely derived and unclamped.
#[function_component(ParallaxImage)]
pub fn parallax_image(props: &ParallaxImageProps) -> Html {
    let offset = use_parallax(props.speed);

    html! {
        <div class={classes!("parallax-frame", props.class.clone())} style="overflow: hidden;">
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                style={format!(
                    "width: 100%; height: 100%; object-fit: cover; transform: translateY({offset}px);"
                )}
            />
        </div>
    }
}
