use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Percentage of the scrollable distance already covered, in [0, 100].
/// Pages that do not scroll report 0.
pub(crate) fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let total = scroll_height - viewport_height;
    if total <= 0.0 {
        return 0.0;
    }
    (scroll_y / total * 100.0).clamp(0.0, 100.0)
}

/// Thin gradient bar pinned to the top of the viewport, scaled horizontally
/// by the scroll progress.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state_eq(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let window_inner = window.clone();
                let on_scroll = move || {
                    let Some(root) = window_inner
                        .document()
                        .and_then(|d| d.document_element())
                    else {
                        return;
                    };
                    let viewport = window_inner
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    let scroll_y = window_inner.scroll_y().unwrap_or(0.0);
                    progress.set(scroll_progress(
                        scroll_y,
                        f64::from(root.scroll_height()),
                        viewport,
                    ));
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
            (),
        );
    }

    html! {
        <div
            style={format!(
                "position: fixed; top: 0; left: 0; right: 0; height: 4px; z-index: 120; \
                 background: linear-gradient(90deg, #2563eb, #1e3a8a); \
                 transform-origin: left; transform: scaleX({});",
                *progress / 100.0
            )}
            aria-hidden="true"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::scroll_progress;

    #[test]
    fn progress_spans_zero_to_one_hundred() {
        assert_eq!(scroll_progress(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(1100.0, 3000.0, 800.0), 50.0);
        assert_eq!(scroll_progress(2200.0, 3000.0, 800.0), 100.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(scroll_progress(9999.0, 3000.0, 800.0), 100.0);
        assert_eq!(scroll_progress(-50.0, 3000.0, 800.0), 0.0);
    }

    #[test]
    fn non_scrolling_page_reports_zero() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 0.0);
    }
}
