use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};
use crate::components::quote_form::QuoteForm;
use crate::hooks::use_parallax;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d50830.84472302726!2d-122.3577128!3d37.5630088!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x808f9e6c7e5e8b8d%3A0x4b9c0f8e8b8e8b8d!2sSan%20Mateo%2C%20CA!5e0!3m2!1sen!2sus!4v1635000000000!5m2!1sen!2sus";

#[function_component(Contact)]
pub fn contact() -> Html {
    let parallax_offset = use_parallax(0.5);

    html! {
        <div>
            <style>
                {r#"
                    .contact-card {
                        background: #fff; border-radius: 10px;
                        padding: 1.5rem; text-align: center;
                        box-shadow: 0 10px 24px rgba(15, 30, 80, 0.08);
                        height: 100%;
                        display: flex; flex-direction: column; justify-content: center;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .contact-card:hover {
                        transform: translateY(-5px);
                        box-shadow: 0 16px 32px rgba(15, 30, 80, 0.12);
                    }
                    .contact-card h3 { font-size: 1.1rem; margin: 1rem 0 0.5rem; }
                    .contact-card a { color: #1d4ed8; font-weight: 600; }
                    .contact-card a:hover { color: #1e40af; }
                    .contact-card .note { font-size: 0.85rem; color: #55607a; margin-top: 0.5rem; }
                    .contact-card .hours p { font-size: 0.9rem; color: #3a4358; padding: 0.15rem 0; }
                    .quote-map-grid {
                        display: grid; grid-template-columns: 1fr 1fr; gap: 4rem;
                    }
                    .map-frame {
                        background: #f3f4f6;
                        border-radius: 10px;
                        overflow: hidden;
                        box-shadow: 0 10px 24px rgba(15, 30, 80, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .map-frame:hover { transform: scale(1.02); }
                    .map-frame iframe { display: block; border: 0; width: 100%; }
                    .claims-band {
                        background: #fef2f2;
                        border-top: 4px solid #f87171;
                        padding: 4rem 0;
                        text-align: center;
                    }
                    .claims-band h3 { font-size: 1.75rem; color: #7f1d1d; margin-bottom: 1rem; }
                    .claims-band p { color: #991b1b; margin-bottom: 1.5rem; }
                    .claims-band .btn-claims {
                        display: inline-block;
                        background: #dc2626; color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 10px;
                        font-size: 1.1rem; font-weight: 600;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .claims-band .btn-claims:hover { background: #b91c1c; transform: scale(1.05); }
                    @media (max-width: 1023px) {
                        .quote-map-grid { grid-template-columns: 1fr; gap: 2.5rem; }
                    }
                "#}
            </style>

            <section class="section gradient-bg" style="position: relative; overflow: hidden; padding-top: 9rem;">
                <div
                    style={format!(
                        "position: absolute; inset: 0; background: rgba(0, 0, 0, 0.1); \
                         transform: translateY({parallax_offset}px);"
                    )}
                    aria-hidden="true"
                />
                <div class="container" style="position: relative; text-align: center;">
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <h1 class="page-title">{"Contact Your San Mateo Insurance Agent"}</h1>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                        <p class="page-lead">
                            {"Request your free insurance quote today. Call, email, or fill out the form. \
                              I'm here to help you find the right coverage in San Mateo, CA."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <div class="grid-4">
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.1}>
                            <div class="contact-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.2}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{260E}"}</div>
                                </AnimatedSection>
                                <h3>{"Call Us"}</h3>
                                <a href="tel:+16504651676" aria-label="Call us at 650-465-1676">
                                    {"(650) 465-1676"}
                                </a>
                                <p class="note">{"Mon-Fri: 9AM-6PM"}</p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                            <div class="contact-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.3}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{2709}"}</div>
                                </AnimatedSection>
                                <h3>{"Email Us"}</h3>
                                <a href="mailto:ethan@ethanli.com" aria-label="Email us at ethan@ethanli.com">
                                    {"ethan@ethanli.com"}
                                </a>
                                <p class="note">{"24-hour response"}</p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.3}>
                            <div class="contact-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.4}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{1F4CD}"}</div>
                                </AnimatedSection>
                                <h3>{"Location"}</h3>
                                <p style="font-weight: 500;">{"San Mateo, CA"}</p>
                                <p class="note">{"Serving all of San Mateo County"}</p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                            <div class="contact-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.5}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{1F552}"}</div>
                                </AnimatedSection>
                                <h3>{"Office Hours"}</h3>
                                <div class="hours">
                                    <p>{"Mon-Fri: 9:00 AM - 6:00 PM"}</p>
                                    <p>{"Sat: 9:00 AM - 2:00 PM"}</p>
                                    <p>{"Sun: By appointment"}</p>
                                </div>
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="quote-map-grid">
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.1}>
                            <QuoteForm />
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                            <div style="display: flex; flex-direction: column; justify-content: center; height: 100%;">
                                <h3 style="font-size: 1.5rem; text-align: center; margin-bottom: 1.5rem;">
                                    {"Serving San Mateo County & Beyond"}
                                </h3>
                                <AnimatedSection kind={RevealKind::Scale} delay={0.3}>
                                    <div class="map-frame">
                                        <iframe
                                            src={MAP_EMBED_URL}
                                            height="300"
                                            allowfullscreen={true}
                                            loading="lazy"
                                            referrerpolicy="no-referrer-when-downgrade"
                                            title="San Mateo, CA location map"
                                            aria-label="Google Maps showing San Mateo, California"
                                        />
                                    </div>
                                </AnimatedSection>
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="claims-band">
                <div class="container" style="max-width: 56rem;">
                    <AnimatedSection kind={RevealKind::FadeUp}>
                        <h3>{"Need to Report a Claim?"}</h3>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <p>
                            {"If you need to report a claim or have an emergency, please call your insurance \
                              company's 24-hour claims hotline first, then contact me so I can assist you through \
                              the process."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                        <a
                            href="tel:+16504651676"
                            class="btn-claims"
                            aria-label="Call for claims assistance at 650-465-1676"
                        >
                            {"Call for Claims Assistance"}
                        </a>
                    </AnimatedSection>
                </div>
            </section>
        </div>
    }
}
