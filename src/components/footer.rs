use yew::prelude::*;

use crate::{Page, NAV_PAGES};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="site-footer" role="contentinfo">
            <style>
                {r#"
                    .site-footer { background: #111827; color: #fff; }
                    .footer-grid {
                        max-width: 1180px; margin: 0 auto;
                        padding: 3rem 1.5rem;
                        display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem;
                    }
                    .footer-grid h4 { font-size: 1.1rem; margin-bottom: 1rem; }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1rem; }
                    .footer-brand .shield { color: #60a5fa; font-size: 1.8rem; }
                    .footer-brand p { font-size: 0.8rem; color: #cbd5e1; }
                    .footer-text { color: #cbd5e1; font-size: 0.9rem; }
                    .footer-license { color: #64748b; font-size: 0.8rem; margin-top: 1rem; }
                    .footer-links button {
                        display: block;
                        color: #cbd5e1;
                        padding: 0.25rem 0;
                        transition: color 0.2s ease;
                    }
                    .footer-links button:hover { color: #fff; }
                    .footer-contact a, .footer-contact div {
                        display: flex; align-items: center; gap: 0.75rem;
                        color: #cbd5e1;
                        padding: 0.3rem 0;
                    }
                    .footer-contact a:hover { color: #fff; }
                    .footer-hours p { font-size: 0.9rem; color: #cbd5e1; }
                    .footer-bottom {
                        max-width: 1180px; margin: 0 auto;
                        padding: 1.5rem;
                        border-top: 1px solid #374151;
                        display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem;
                        font-size: 0.85rem; color: #94a3b8;
                    }
                    @media (max-width: 1023px) { .footer-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <span class="shield" aria-hidden="true">{"\u{1F6E1}"}</span>
                        <div>
                            <h4>{"Ethan Li Insurance"}</h4>
                            <p>{"Personal Lines Agent"}</p>
                        </div>
                    </div>
                    <p class="footer-text">
                        {"Your trusted insurance partner in San Mateo, protecting what matters most to you and your family."}
                    </p>
                    <p class="footer-license">{"License #: 0A12345"}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <nav role="navigation" aria-label="Footer navigation">
                        { for NAV_PAGES.iter().map(|&page| {
                            let on_click = {
                                let on_navigate = props.on_navigate.clone();
                                Callback::from(move |_: MouseEvent| on_navigate.emit(page))
                            };
                            html! {
                                <button onclick={on_click}>{ page.label() }</button>
                            }
                        }) }
                    </nav>
                </div>
                <div class="footer-contact">
                    <h4>{"Contact Info"}</h4>
                    <a href="tel:+16504651676" aria-label="Call us at 650-465-1676">
                        <span aria-hidden="true">{"\u{260E}"}</span>
                        <span>{"(650) 465-1676"}</span>
                    </a>
                    <a href="mailto:ethan@ethanli.com" aria-label="Email us at ethan@ethanli.com">
                        <span aria-hidden="true">{"\u{2709}"}</span>
                        <span>{"ethan@ethanli.com"}</span>
                    </a>
                    <div>
                        <span aria-hidden="true">{"\u{1F4CD}"}</span>
                        <span>{"San Mateo, CA"}</span>
                    </div>
                </div>
                <div class="footer-hours">
                    <h4>{"Business Hours"}</h4>
                    <p>{"Mon - Fri: 9:00 AM - 6:00 PM"}</p>
                    <p>{"Sat: 9:00 AM - 2:00 PM"}</p>
                    <p>{"Sun: By appointment"}</p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"\u{A9} 2025 Ethan Li Insurance. All rights reserved."}</p>
                <p>{"Serving San Mateo, Burlingame, Foster City, Redwood City, and Belmont"}</p>
            </div>
        </footer>
    }
}
