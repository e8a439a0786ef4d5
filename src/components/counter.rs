use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::hooks::use_reveal;

pub(crate) fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// Displayed value at `elapsed_ms` into the count-up. Progress is clamped to
/// [0, 1], so the value settles exactly on `end` once the duration elapses.
pub(crate) fn counter_value(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (f64::from(end) * ease_out_quart(progress)).floor() as u32
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    /// Animation duration in seconds.
    #[prop_or(2.0)]
    pub duration: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Counts up from 0 once the element scrolls into view. One-shot per mount:
/// the frame loop stops at the target and is never retriggered. Unmounting
/// mid-flight cancels the pending frame.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let (node, shown) = use_reveal(0.5);
    let count = use_state_eq(|| 0u32);

    {
        let count = count.clone();
        let end = props.end;
        let duration_ms = props.duration * 1000.0;
        use_effect_with_deps(
            move |&shown| {
                if !shown {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
                let start: Rc<Cell<Option<f64>>> = Rc::new(Cell::new(None));
                let raf_id = Rc::new(Cell::new(0));
                let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                let frame_inner = frame.clone();
                let raf_id_inner = raf_id.clone();
                *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                    let begin = match start.get() {
                        Some(t) => t,
                        None => {
                            start.set(Some(now));
                            now
                        }
                    };
                    let elapsed = now - begin;
                    count.set(counter_value(end, elapsed, duration_ms));
                    if elapsed < duration_ms {
                        if let Some(window) = web_sys::window() {
                            if let Some(cb) = frame_inner.borrow().as_ref() {
                                if let Ok(id) = window
                                    .request_animation_frame(cb.as_ref().unchecked_ref())
                                {
                                    raf_id_inner.set(id);
                                }
                            }
                        }
                    } else {
                        // Settled on the target; releasing the cell frees the
                        // closure once this invocation returns.
                        let _ = frame_inner.borrow_mut().take();
                    }
                }) as Box<dyn FnMut(f64)>));

                if let Some(window) = web_sys::window() {
                    if let Some(cb) = frame.borrow().as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(cb.as_ref().unchecked_ref())
                        {
                            raf_id.set(id);
                        }
                    }
                }

                Box::new(move || {
                    // Cancel before dropping so a pending frame cannot call
                    // into a freed closure.
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(raf_id.get());
                    }
                    let _ = frame.borrow_mut().take();
                }) as Box<dyn FnOnce()>
            },
            shown,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()}>
            { *count }{ props.suffix.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{counter_value, ease_out_quart};

    #[test]
    fn easing_hits_both_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn easing_front_loads_the_motion() {
        // Ease-out: more than half the distance covered by the midpoint.
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn value_starts_at_zero() {
        assert_eq!(counter_value(1200, 0.0, 2000.0), 0);
    }

    #[test]
    fn value_settles_exactly_on_target_at_and_past_the_duration() {
        assert_eq!(counter_value(1200, 2000.0, 2000.0), 1200);
        assert_eq!(counter_value(1200, 2016.0, 2000.0), 1200);
        assert_eq!(counter_value(1200, 60_000.0, 2000.0), 1200);
    }

    #[test]
    fn value_never_overshoots_and_never_regresses() {
        let mut last = 0;
        for frame in 0..=125 {
            let elapsed = f64::from(frame) * 16.0;
            let value = counter_value(1200, elapsed, 2000.0);
            assert!(value <= 1200);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 1200);
    }

    #[test]
    fn frame_at_the_duration_boundary_shows_the_final_value() {
        // The frame loop reschedules only while elapsed < duration, so the
        // last callback it ever runs must already display the target.
        assert!(counter_value(1200, 1999.9, 2000.0) <= 1200);
        assert_eq!(counter_value(1200, 2000.0, 2000.0), 1200);
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        assert_eq!(counter_value(15, 0.0, 0.0), 15);
    }
}
