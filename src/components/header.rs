use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::{Page, NAV_PAGES};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

/// Fixed top navigation with a burger menu below the desktop breakpoint.
/// Picks up a solid background once the page has scrolled past the top.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let Some(window) = web_sys::window() else {
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                };
                let window_inner = window.clone();
                let on_scroll = Closure::wrap(Box::new(move || {
                    let scroll_y = window_inner.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 10.0);
                }) as Box<dyn FnMut()>);
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_links = |mobile: bool| -> Html {
        NAV_PAGES
            .iter()
            .map(|&page| {
                let on_click = {
                    let on_navigate = props.on_navigate.clone();
                    let menu_open = menu_open.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_navigate.emit(page);
                        menu_open.set(false);
                    })
                };
                let active = props.current == page;
                html! {
                    <button
                        class={classes!(
                            "nav-link",
                            active.then_some("nav-link-active"),
                            mobile.then_some("nav-link-mobile"),
                        )}
                        onclick={on_click}
                        aria-current={active.then_some("page")}
                    >
                        { page.label() }
                    </button>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))} role="banner">
            <style>
                {r#"
                    .top-nav {
                        position: fixed; top: 0; left: 0; right: 0;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.95);
                        backdrop-filter: blur(6px);
                        transition: box-shadow 0.3s ease, background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: #fff;
                        box-shadow: 0 4px 16px rgba(15, 30, 80, 0.1);
                    }
                    .nav-content {
                        max-width: 1180px; margin: 0 auto;
                        padding: 0.9rem 1.5rem;
                        display: flex; align-items: center; justify-content: space-between;
                    }
                    .nav-brand { display: flex; align-items: center; gap: 0.75rem; cursor: pointer; }
                    .nav-brand .shield { color: #1d4ed8; font-size: 1.8rem; }
                    .nav-brand h1 { font-size: 1.2rem; }
                    .nav-brand p { font-size: 0.8rem; color: #55607a; }
                    .nav-links { display: flex; align-items: center; gap: 2rem; }
                    .nav-link { font-size: 0.95rem; font-weight: 500; color: #3c4257; transition: color 0.2s ease; }
                    .nav-link:hover { color: #1d4ed8; }
                    .nav-link-active { color: #1d4ed8; font-weight: 700; text-decoration: underline; }
                    .nav-phone {
                        display: flex; align-items: center; gap: 0.5rem;
                        color: #1d4ed8; font-weight: 600;
                    }
                    .nav-phone:hover { color: #1e40af; }
                    .burger-menu { display: none; flex-direction: column; gap: 4px; padding: 0.5rem; }
                    .burger-menu span { width: 22px; height: 2px; background: #3c4257; }
                    .mobile-nav {
                        display: none;
                        background: #fff;
                        border-top: 1px solid #eceff5;
                        box-shadow: 0 8px 16px rgba(15, 30, 80, 0.1);
                        padding: 1rem 1.5rem;
                    }
                    .nav-link-mobile { display: block; width: 100%; text-align: left; padding: 0.6rem 0; }
                    @media (max-width: 1023px) {
                        .nav-links, .nav-phone-wrap { display: none; }
                        .burger-menu { display: flex; }
                        .mobile-nav.open { display: block; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-brand" onclick={{
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home))
                }}>
                    <span class="shield" aria-hidden="true">{"\u{1F6E1}"}</span>
                    <div>
                        <h1>{"Ethan Li Insurance"}</h1>
                        <p>{"Personal Lines Agent"}</p>
                    </div>
                </div>
                <nav class="nav-links" role="navigation" aria-label="Main navigation">
                    { nav_links(false) }
                </nav>
                <div class="nav-phone-wrap">
                    <a href="tel:+16504651676" class="nav-phone" aria-label="Call us at 650-465-1676">
                        <span aria-hidden="true">{"\u{260E}"}</span>
                        <span>{"(650) 465-1676"}</span>
                    </a>
                </div>
                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={if *menu_open { "true" } else { "false" }}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <nav
                class={classes!("mobile-nav", (*menu_open).then_some("open"))}
                role="navigation"
                aria-label="Mobile navigation"
            >
                { nav_links(true) }
                <a href="tel:+16504651676" class="nav-phone" style="padding: 0.75rem 0;">
                    <span aria-hidden="true">{"\u{260E}"}</span>
                    <span>{"(650) 465-1676"}</span>
                </a>
            </nav>
        </header>
    }
}
