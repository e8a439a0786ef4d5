use yew::prelude::*;

use crate::hooks::use_reveal;

/// The six reveal presets. Each variant carries its own entry pose; the exit
/// pose is the shared identity transform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealKind {
    #[default]
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Scale,
    Rotate,
}

impl RevealKind {
    fn entry_pose(self) -> &'static str {
        match self {
            RevealKind::FadeUp => "opacity: 0; transform: translateY(60px);",
            RevealKind::FadeDown => "opacity: 0; transform: translateY(-60px);",
            RevealKind::FadeLeft => "opacity: 0; transform: translateX(-60px);",
            RevealKind::FadeRight => "opacity: 0; transform: translateX(60px);",
            RevealKind::Scale => "opacity: 0; transform: scale(0.8);",
            RevealKind::Rotate => "opacity: 0; transform: rotate(-10deg) scale(0.9);",
        }
    }

    fn exit_pose(self) -> &'static str {
        "opacity: 1; transform: none;"
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub kind: RevealKind,
    /// Transition delay in seconds.
    #[prop_or(0.0)]
    pub delay: f64,
    /// Transition duration in seconds.
    #[prop_or(0.8)]
    pub duration: f64,
    /// Fraction of the element that must be in view before it reveals.
    #[prop_or(0.1)]
    pub threshold: f64,
}

/// Wraps content in a one-shot scroll reveal: hidden in the variant's entry
/// pose until the visibility latch fires, then eased into place. Revealed
/// content never hides again.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let (node, shown) = use_reveal(props.threshold);

    let pose = if shown {
        props.kind.exit_pose()
    } else {
        props.kind.entry_pose()
    };
    let curve = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";
    let style = format!(
        "{pose} transition: opacity {dur}s {curve} {delay}s, transform {dur}s {curve} {delay}s;",
        dur = props.duration,
        delay = props.delay,
    );

    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { props.children.clone() }
        </div>
    }
}
