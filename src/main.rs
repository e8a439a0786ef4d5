use gloo_timers::callback::Timeout;
use log::{info, Level};
use yew::prelude::*;

mod components {
    pub mod animated;
    pub mod carousel;
    pub mod counter;
    pub mod footer;
    pub mod header;
    pub mod parallax;
    pub mod quote_form;
    pub mod scroll_progress;
}
mod hooks;
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod services;
    pub mod testimonials;
}
mod seo;

use components::footer::Footer;
use components::header::Header;
use components::scroll_progress::ScrollProgressBar;
use pages::{
    about::About, contact::Contact, home::Home, services::Services,
    testimonials::Testimonials,
};

/// The five pages of the site. This is deliberately not a URL router: the
/// current page is a single in-memory value with no history stack and no
/// deep-linking.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Services,
    Testimonials,
    Contact,
}

impl Page {
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Testimonials => "testimonials",
            Page::Contact => "contact",
        }
    }

    /// Unrecognized keys fall back silently to the default page.
    pub fn from_key(key: &str) -> Page {
        match key {
            "about" => Page::About,
            "services" => Page::Services,
            "testimonials" => Page::Testimonials,
            "contact" => Page::Contact,
            _ => Page::Home,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Testimonials => "Testimonials",
            Page::Contact => "Contact",
        }
    }
}

pub const NAV_PAGES: [Page; 5] = [
    Page::Home,
    Page::About,
    Page::Services,
    Page::Testimonials,
    Page::Contact,
];

fn switch(page: Page, on_navigate: Callback<Page>) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home {on_navigate} /> }
        }
        Page::About => {
            info!("Rendering About page");
            html! { <About {on_navigate} /> }
        }
        Page::Services => {
            info!("Rendering Services page");
            html! { <Services {on_navigate} /> }
        }
        Page::Testimonials => {
            info!("Rendering Testimonials page");
            html! { <Testimonials {on_navigate} /> }
        }
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
    }
}

const GLOBAL_STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1a1a2e;
        background: #fff;
        line-height: 1.5;
    }
    main { position: relative; }
    a { text-decoration: none; color: inherit; }
    button { font: inherit; border: none; background: none; cursor: pointer; }
    .container { max-width: 1180px; margin: 0 auto; padding: 0 1.5rem; }
    .section { padding: 5rem 0; }
    .section-light { background: #f8f9fb; }
    .section-blue { background: #eef4ff; }
    .gradient-bg { background: linear-gradient(135deg, #1d4ed8 0%, #1e3a8a 100%); color: #fff; }
    .section-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 1rem; }
    .section-lead { font-size: 1.2rem; color: #55607a; max-width: 46rem; margin: 0 auto 3rem; }
    .gradient-bg .section-lead { color: #c7d8ff; }
    .grid-2 { display: grid; grid-template-columns: repeat(2, 1fr); gap: 2.5rem; align-items: center; }
    .grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
    .grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
    .card {
        background: #fff;
        border-radius: 16px;
        padding: 2rem;
        box-shadow: 0 8px 24px rgba(15, 30, 80, 0.08);
        border: 1px solid rgba(29, 78, 216, 0.06);
    }
    .icon-circle {
        width: 4rem; height: 4rem;
        border-radius: 50%;
        background: #1d4ed8;
        color: #fff;
        display: flex; align-items: center; justify-content: center;
        margin: 0 auto 1rem;
        font-size: 1.4rem; font-weight: 700;
    }
    .btn {
        display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
        padding: 1rem 2rem;
        border-radius: 10px;
        font-weight: 600; font-size: 1.05rem;
        transition: transform 0.2s ease, background 0.2s ease;
    }
    .btn:hover { transform: translateY(-2px); }
    .btn-light { background: #fff; color: #1d4ed8; }
    .btn-light:hover { background: #eef4ff; }
    .btn-blue { background: #2563eb; color: #fff; }
    .btn-blue:hover { background: #3b82f6; }
    .btn-row { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .cta-band { text-align: center; position: relative; overflow: hidden; }
    .cta-band h2 { font-size: 2.25rem; margin-bottom: 1.25rem; }
    .cta-band p { font-size: 1.2rem; margin-bottom: 2rem; }
    .page-title { font-size: 3rem; font-weight: 700; margin-bottom: 1.5rem; }
    .page-lead { font-size: 1.25rem; color: #c7d8ff; max-width: 50rem; margin: 0 auto; line-height: 1.6; }
    .section-head { text-align: center; margin-bottom: 3rem; }
    .skip-link {
        position: absolute; left: -999px; top: 1rem;
        background: #1d4ed8; color: #fff;
        padding: 0.5rem 1rem; border-radius: 8px; z-index: 200;
    }
    .skip-link:focus { left: 1rem; }
    @media (max-width: 1023px) {
        .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
        .page-title { font-size: 2.2rem; }
        .section-title { font-size: 1.8rem; }
    }
"#;

#[function_component]
fn App() -> Html {
    let current_page = use_state(Page::default);
    let is_loading = use_state(|| true);

    // Brief splash before the first shell render.
    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(1_000, move || {
                    is_loading.set(false);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // The one page-transition boundary: scroll back to the top and rewrite
    // the document head metadata. No other code touches the head.
    {
        use_effect_with_deps(
            move |page| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                seo::apply(*page);
                || ()
            },
            *current_page,
        );
    }

    let on_navigate = {
        let current_page = current_page.clone();
        Callback::from(move |page: Page| {
            current_page.set(page);
        })
    };

    if *is_loading {
        return html! {
            <div class="gradient-bg" style="min-height: 100vh; display: flex; align-items: center; justify-content: center;">
                <style>{GLOBAL_STYLE}</style>
                <style>
                    {r#"
                        .splash-spinner {
                            width: 4rem; height: 4rem;
                            border: 4px solid #fff;
                            border-top-color: transparent;
                            border-radius: 50%;
                            margin: 0 auto 1rem;
                            animation: splash-spin 1s linear infinite;
                        }
                        @keyframes splash-spin { to { transform: rotate(360deg); } }
                    "#}
                </style>
                <div style="text-align: center;">
                    <div class="splash-spinner"></div>
                    <p style="font-size: 1.25rem; font-weight: 600;">{"Loading San Mateo Insurance..."}</p>
                </div>
            </div>
        };
    }

    html! {
        <div style="min-height: 100vh;">
            <style>{GLOBAL_STYLE}</style>
            <ScrollProgressBar />
            <a href="#main-content" class="skip-link">{"Skip to main content"}</a>
            <Header current={*current_page} on_navigate={on_navigate.clone()} />
            <main id="main-content">
                { switch(*current_page, on_navigate.clone()) }
            </main>
            <Footer {on_navigate} />
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn every_page_round_trips_through_its_key() {
        for page in super::NAV_PAGES {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn unrecognized_key_falls_back_to_home() {
        assert_eq!(Page::from_key("pricing"), Page::Home);
        assert_eq!(Page::from_key(""), Page::Home);
    }
}
