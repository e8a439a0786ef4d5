//! Scroll-driven hooks shared by the animated components.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// One-shot visibility latch. The only transition is `Hidden -> Shown`;
/// scrolling an element back out of view never hides it again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Reveal {
    #[default]
    Hidden,
    Shown,
}

impl Reveal {
    pub fn observe(self, in_view: bool) -> Reveal {
        match (self, in_view) {
            (Reveal::Hidden, true) => Reveal::Shown,
            (state, _) => state,
        }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Reveal::Shown)
    }
}

/// Fraction of an element's height currently inside the viewport, from its
/// bounding-rect edges. Zero-height elements count as fully visible while
/// they intersect the viewport at all.
pub(crate) fn visible_fraction(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return if top < viewport_height && bottom > 0.0 { 1.0 } else { 0.0 };
    }
    let visible = bottom.min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Vertical parallax offset in pixels. Purely derived, unclamped.
pub(crate) fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Tracks when the referenced element first has at least `threshold` of its
/// area inside the viewport. Returns the node ref to attach and the latched
/// visibility. Listeners are torn down as soon as the latch fires; an
/// unattached node ref is a no-op.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let reveal = use_state_eq(Reveal::default);

    {
        let node = node.clone();
        let reveal_handle = reveal.clone();
        use_effect_with_deps(
            move |&shown| {
                if shown {
                    // Nothing left to observe once the latch has fired.
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let window_inner = window.clone();
                let check = move || {
                    let Some(el) = node.cast::<web_sys::Element>() else {
                        return;
                    };
                    let viewport = window_inner
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let rect = el.get_bounding_client_rect();
                    let in_view =
                        visible_fraction(rect.top(), rect.bottom(), viewport) >= threshold;
                    reveal_handle.set(reveal_handle.observe(in_view));
                };
                // Elements mounted already in view reveal without a scroll.
                check();
                let check = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref());
                let _ = window
                    .add_event_listener_with_callback("resize", check.as_ref().unchecked_ref());
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        check.as_ref().unchecked_ref(),
                    );
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        check.as_ref().unchecked_ref(),
                    );
                }) as Box<dyn FnOnce()>
            },
            reveal.is_shown(),
        );
    }

    (node, reveal.is_shown())
}

/// Current scroll offset scaled by `speed`, recomputed on every scroll tick.
#[hook]
pub fn use_parallax(speed: f64) -> f64 {
    let offset = use_state_eq(|| 0.0);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |&speed| {
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let window_inner = window.clone();
                let on_scroll = move || {
                    let scroll_y = window_inner.scroll_y().unwrap_or(0.0);
                    offset.set(parallax_offset(scroll_y, speed));
                };
                on_scroll();
                let on_scroll = Closure::wrap(Box::new(on_scroll) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }) as Box<dyn FnOnce()>
            },
            speed,
        );
    }

    *offset
}

#[cfg(test)]
mod tests {
    use super::{parallax_offset, visible_fraction, Reveal};

    #[test]
    fn reveal_latches_on_first_sighting() {
        let reveal = Reveal::Hidden.observe(true);
        assert_eq!(reveal, Reveal::Shown);
    }

    #[test]
    fn reveal_never_reverts_after_scrolling_away() {
        let mut reveal = Reveal::Hidden;
        for in_view in [false, true, false, false, true, false] {
            reveal = reveal.observe(in_view);
        }
        assert!(reveal.is_shown());
    }

    #[test]
    fn hidden_stays_hidden_while_out_of_view() {
        assert_eq!(Reveal::Hidden.observe(false), Reveal::Hidden);
    }

    #[test]
    fn fraction_is_zero_offscreen_and_one_fully_visible() {
        assert_eq!(visible_fraction(900.0, 1100.0, 800.0), 0.0);
        assert_eq!(visible_fraction(-300.0, -100.0, 800.0), 0.0);
        assert_eq!(visible_fraction(100.0, 300.0, 800.0), 1.0);
    }

    #[test]
    fn fraction_is_partial_at_the_viewport_edge() {
        // 200px tall, bottom 50px inside an 800px viewport.
        let f = visible_fraction(750.0, 950.0, 800.0);
        assert!((f - 0.25).abs() < 1e-9);
    }

    #[test]
    fn parallax_scales_scroll_and_is_unclamped() {
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
        assert_eq!(parallax_offset(400.0, 0.3), 120.0);
        assert_eq!(parallax_offset(100_000.0, 0.5), 50_000.0);
        assert_eq!(parallax_offset(400.0, 0.0), 0.0);
    }
}
