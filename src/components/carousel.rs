use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// One client review. The list is fixed at compile time and immutable at
/// runtime.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub location: &'static str,
    /// 1 to 5 stars.
    pub rating: u8,
    pub text: &'static str,
}

/// Highest cursor position that still shows a full window of entries.
pub(crate) fn max_index(len: usize, visible: usize) -> usize {
    len.saturating_sub(visible)
}

/// Timer-driven advance: wraps back to 0 once a further step would run past
/// the end. Only the timer wraps; manual navigation clamps instead.
pub(crate) fn auto_advance(index: usize, visible: usize, len: usize) -> usize {
    if index >= max_index(len, visible) {
        0
    } else {
        index + visible
    }
}

/// Manual forward step, clamped to the last full window.
pub(crate) fn next_index(index: usize, visible: usize, len: usize) -> usize {
    (index + visible).min(max_index(len, visible))
}

/// Manual backward step, clamped to 0.
pub(crate) fn prev_index(index: usize, visible: usize) -> usize {
    index.saturating_sub(visible)
}

/// Number of jump indicators: one per group of `visible` entries.
pub(crate) fn group_count(len: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    len.div_ceil(visible)
}

/// Two cards side by side on desktop viewports, one otherwise.
pub(crate) fn visible_count_for_width(width: f64) -> usize {
    if width >= 1024.0 {
        2
    } else {
        1
    }
}

fn current_visible_count() -> usize {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    visible_count_for_width(width)
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub entries: Vec<Testimonial>,
}

/// Auto-advancing review carousel. Plays on a 4 s interval, fully suspends
/// while the pointer hovers the track (no missed-tick catch-up), wraps on
/// timer ticks but clamps on manual navigation, and re-clamps the cursor
/// when a resize changes how many cards are visible.
#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let len = props.entries.len();
    let index = use_state_eq(|| 0usize);
    let paused = use_state_eq(|| false);
    let visible = use_state_eq(current_visible_count);

    // Track viewport resizes; the cursor itself is only touched through the
    // clamp below.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let on_resize = Closure::wrap(Box::new(move || {
                    visible.set(current_visible_count());
                }) as Box<dyn FnMut()>);
                let _ = window
                    .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                }) as Box<dyn FnOnce()>
            },
            (),
        );
    }

    // Invariant: index + visible <= len.
    {
        let index = index.clone();
        use_effect_with_deps(
            move |&(visible, len)| {
                index.set((*index).min(max_index(len, visible)));
                || ()
            },
            (*visible, len),
        );
    }

    // The interval only exists while playing; pausing drops it outright.
    {
        let deps = (*index, *paused, *visible, len);
        let index = index.clone();
        use_effect_with_deps(
            move |&(current, paused, visible, len)| {
                if paused || len == 0 {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
                let interval = Interval::new(4_000, move || {
                    index.set(auto_advance(current, visible, len));
                });
                Box::new(move || drop(interval)) as Box<dyn FnOnce()>
            },
            deps,
        );
    }

    let on_prev = {
        let index = index.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            index.set(prev_index(*index, *visible));
        })
    };
    let on_next = {
        let index = index.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            index.set(next_index(*index, *visible, len));
        })
    };
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    let card_width = 100.0 / *visible as f64;
    let track_style = format!(
        "display: flex; height: 100%; transition: transform 0.5s ease-in-out; \
         transform: translateX(-{}%);",
        *index as f64 * card_width
    );
    let at_start = *index == 0;
    let at_end = *index >= max_index(len, *visible);

    html! {
        <div class="carousel">
            <style>
                {r#"
                    .carousel-viewport { overflow: hidden; height: 420px; }
                    .carousel-card-slot { flex-shrink: 0; padding: 0 0.75rem; height: 100%; }
                    .carousel-card {
                        background: #fff;
                        border: 1px solid #eceff5;
                        border-radius: 16px;
                        box-shadow: 0 8px 24px rgba(15, 30, 80, 0.08);
                        padding: 2.5rem;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        position: relative;
                    }
                    .carousel-card .quote-mark {
                        position: absolute; top: 1.25rem; right: 1.5rem;
                        font-size: 3rem; line-height: 1;
                        color: #93b4f8; opacity: 0.75;
                    }
                    .carousel-card blockquote {
                        color: #3c4257; flex-grow: 1; margin: 1rem 0 1.5rem;
                        overflow: hidden;
                    }
                    .carousel-card cite {
                        font-style: normal;
                        border-top: 1px solid #eceff5;
                        padding-top: 1rem;
                    }
                    .carousel-card cite .name { font-weight: 600; }
                    .carousel-card cite .location { font-size: 0.9rem; color: #55607a; }
                    .stars { color: #fbbf24; letter-spacing: 2px; }
                    .stars .empty { color: #d4d8e3; }
                    .carousel-arrows { display: flex; justify-content: space-between; margin-top: 1.5rem; }
                    .carousel-arrow {
                        background: #fff;
                        border-radius: 50%;
                        width: 2.5rem; height: 2.5rem;
                        box-shadow: 0 2px 8px rgba(15, 30, 80, 0.15);
                        font-size: 1.1rem;
                        color: #3c4257;
                    }
                    .carousel-arrow:disabled { opacity: 0.5; cursor: not-allowed; }
                    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1.5rem; }
                    .carousel-dot {
                        height: 0.5rem; width: 0.5rem;
                        border-radius: 999px;
                        background: #d4d8e3;
                        transition: all 0.3s ease;
                    }
                    .carousel-dot.active { width: 2rem; background: #2563eb; }
                "#}
            </style>
            <div class="carousel-viewport">
                <div
                    style={track_style}
                    onmouseenter={on_enter}
                    onmouseleave={on_leave}
                >
                    { for props.entries.iter().map(|entry| {
                        html! {
                            <div
                                key={entry.id}
                                class="carousel-card-slot"
                                style={format!("width: {card_width}%;")}
                            >
                                <div class="carousel-card">
                                    <span class="quote-mark" aria-hidden="true">{"\u{201C}"}</span>
                                    { render_stars(entry.rating) }
                                    <blockquote>{ format!("\u{201C}{}\u{201D}", entry.text) }</blockquote>
                                    <cite>
                                        <div class="name">{ entry.name }</div>
                                        <div class="location">{ entry.location }</div>
                                    </cite>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <div class="carousel-arrows">
                <button
                    class="carousel-arrow"
                    onclick={on_prev}
                    disabled={at_start}
                    aria-label="Previous testimonials"
                >{"\u{2190}"}</button>
                <button
                    class="carousel-arrow"
                    onclick={on_next}
                    disabled={at_end}
                    aria-label="Next testimonials"
                >{"\u{2192}"}</button>
            </div>
            <div class="carousel-dots">
                { for (0..group_count(len, *visible)).map(|group| {
                    let active = *index / (*visible).max(1) == group;
                    let on_jump = {
                        let index = index.clone();
                        let visible = visible.clone();
                        Callback::from(move |_: MouseEvent| {
                            index.set((group * *visible).min(max_index(len, *visible)));
                        })
                    };
                    html! {
                        <button
                            class={classes!("carousel-dot", active.then_some("active"))}
                            onclick={on_jump}
                            aria-label={format!("Go to testimonial group {}", group + 1)}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

pub fn render_stars(rating: u8) -> Html {
    html! {
        <div class="stars" aria-label={format!("{rating} out of 5 stars")}>
            { for (0..5).map(|i| {
                if i < rating {
                    html! { <span>{"\u{2605}"}</span> }
                } else {
                    html! { <span class="empty">{"\u{2605}"}</span> }
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{
        auto_advance, group_count, max_index, next_index, prev_index, visible_count_for_width,
    };

    #[test]
    fn timer_advance_wraps_through_six_entries_two_at_a_time() {
        let mut index = 0;
        let mut seen = vec![index];
        for _ in 0..3 {
            index = auto_advance(index, 2, 6);
            seen.push(index);
        }
        assert_eq!(seen, vec![0, 2, 4, 0]);
    }

    #[test]
    fn timer_advance_wraps_one_at_a_time_on_narrow_viewports() {
        let mut index = 0;
        for _ in 0..5 {
            index = auto_advance(index, 1, 6);
        }
        assert_eq!(index, 5);
        assert_eq!(auto_advance(index, 1, 6), 0);
    }

    #[test]
    fn manual_next_clamps_instead_of_wrapping() {
        let mut index = 0;
        for _ in 0..10 {
            index = next_index(index, 2, 6);
            assert!(index <= max_index(6, 2));
        }
        assert_eq!(index, 4);
        // The same position wraps under the timer.
        assert_eq!(auto_advance(index, 2, 6), 0);
    }

    #[test]
    fn tick_after_manual_jump_advances_from_the_new_cursor() {
        // Each timer tick steps from the cursor as it stands, so a manual
        // move mid-cycle shifts where the next tick lands.
        let jumped = next_index(0, 2, 6);
        assert_eq!(jumped, 2);
        assert_eq!(auto_advance(jumped, 2, 6), 4);
        let back = prev_index(4, 2);
        assert_eq!(auto_advance(back, 2, 6), 4);
    }

    #[test]
    fn manual_prev_clamps_at_zero() {
        assert_eq!(prev_index(0, 2), 0);
        assert_eq!(prev_index(1, 2), 0);
        assert_eq!(prev_index(4, 2), 2);
    }

    #[test]
    fn cursor_plus_window_never_exceeds_length() {
        for visible in [1, 2] {
            let mut index = 0;
            for _ in 0..20 {
                index = auto_advance(index, visible, 6);
                assert!(index + visible <= 6);
                index = next_index(index, visible, 6);
                assert!(index + visible <= 6);
            }
        }
    }

    #[test]
    fn one_indicator_per_group() {
        assert_eq!(group_count(6, 2), 3);
        assert_eq!(group_count(6, 1), 6);
        assert_eq!(group_count(5, 2), 3);
        assert_eq!(group_count(0, 2), 0);
    }

    #[test]
    fn two_cards_on_desktop_one_below_the_breakpoint() {
        assert_eq!(visible_count_for_width(1440.0), 2);
        assert_eq!(visible_count_for_width(1024.0), 2);
        assert_eq!(visible_count_for_width(1023.0), 1);
        assert_eq!(visible_count_for_width(390.0), 1);
    }
}
