use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};
use crate::components::counter::AnimatedCounter;
use crate::components::parallax::ParallaxImage;
use crate::hooks::use_parallax;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

const SERVICE_PREVIEWS: &[(&str, &str)] = &[
    ("Auto Insurance", "Personal car coverage for individuals and families."),
    ("Home Insurance", "Protect your most valuable asset, your home."),
    ("Renters Insurance", "Affordable renters coverage across the Bay Area, CA."),
    ("Umbrella Insurance", "Extra liability protection for any and all needs."),
];

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let parallax_offset = use_parallax(0.5);

    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };
    let go_services = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Services))
    };

    html! {
        <div>
            <style>
                {r#"
                    .home-hero {
                        min-height: 100vh;
                        display: flex; align-items: center;
                        position: relative; overflow: hidden;
                        padding: 7rem 0 5rem;
                    }
                    .home-hero-grid {
                        display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; align-items: center;
                    }
                    .home-hero h1 { font-size: 3.4rem; line-height: 1.15; margin-bottom: 2rem; }
                    .home-hero h1 .accent { color: #93c5fd; display: block; }
                    .home-hero .pitch { font-size: 1.3rem; color: #c7d8ff; margin-bottom: 2rem; }
                    .home-hero-card {
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(6px);
                        border-radius: 20px;
                        padding: 2rem;
                        transform: rotate(3deg);
                        transition: transform 0.5s ease;
                    }
                    .home-hero-card:hover { transform: rotate(0deg); }
                    .home-hero-card .parallax-frame { border-radius: 12px; height: 320px; }
                    .trust-item { text-align: center; }
                    .trust-item .trust-counter { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.75rem; }
                    .trust-item h3 { font-size: 1.25rem; margin-bottom: 0.75rem; }
                    .trust-item p { color: #55607a; }
                    .service-preview {
                        background: #f8f9fb;
                        border-radius: 12px;
                        padding: 1.5rem;
                        height: 100%;
                        cursor: pointer;
                        transition: background 0.3s ease, transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .service-preview:hover {
                        background: #eef4ff;
                        transform: translateY(-5px);
                        box-shadow: 0 12px 24px rgba(15, 30, 80, 0.1);
                    }
                    .service-preview .tile {
                        width: 3rem; height: 3rem;
                        background: #1d4ed8; color: #fff;
                        border-radius: 10px;
                        display: flex; align-items: center; justify-content: center;
                        margin-bottom: 1rem;
                    }
                    .service-preview h3 { font-size: 1.1rem; margin-bottom: 0.5rem; }
                    .service-preview p { font-size: 0.9rem; color: #55607a; }
                    .view-all-btn {
                        display: block;
                        width: min(100%, 28rem);
                        margin: 0 auto;
                        background: #1d4ed8; color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 10px;
                        font-size: 1.2rem; font-weight: 600;
                        transition: background 0.2s ease;
                    }
                    .view-all-btn:hover { background: #1e40af; }
                    @media (max-width: 1023px) {
                        .home-hero-grid { grid-template-columns: 1fr; }
                        .home-hero h1 { font-size: 2.4rem; }
                    }
                "#}
            </style>

            <section class="home-hero gradient-bg">
                <div
                    style={format!(
                        "position: absolute; inset: 0; background: rgba(0, 0, 0, 0.1); \
                         transform: translateY({parallax_offset}px);"
                    )}
                    aria-hidden="true"
                />
                <div class="container" style="position: relative; z-index: 10;">
                    <div class="home-hero-grid">
                        <AnimatedSection kind={RevealKind::FadeRight} delay={0.2}>
                            <h1>
                                {"Protecting What"}
                                <span class="accent">{"Matters Most"}</span>
                            </h1>
                            <p class="pitch">
                                {"Your trusted personal lines insurance agent in San Mateo, CA. I help families and \
                                  individuals find affordable, comprehensive coverage for their homes, cars, and \
                                  everything they value most."}
                            </p>
                            <div class="btn-row" style="justify-content: flex-start;">
                                <button class="btn btn-light" onclick={go_contact.clone()}>
                                    {"Get Free Quote"}
                                    <span aria-hidden="true">{"\u{2192}"}</span>
                                </button>
                                <a href="tel:+16504651676" class="btn btn-blue" aria-label="Call us at 650-465-1676">
                                    <span aria-hidden="true">{"\u{260E}"}</span>
                                    {"(650) 465-1676"}
                                </a>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeLeft} delay={0.4}>
                            <div class="home-hero-card">
                                <ParallaxImage
                                    src="/assets/headshot.png"
                                    alt="Professional insurance agent helping a family"
                                    speed={0.0}
                                />
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <div class="grid-3">
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.1}>
                            <div class="trust-item">
                                <div class="icon-circle" aria-hidden="true">{"\u{1F6E1}"}</div>
                                <AnimatedCounter end={15} suffix="+ Years Experience" class={classes!("trust-counter")} />
                                <p>{"Serving San Mateo and the Bay Area with expert knowledge of local insurance needs."}</p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                            <div class="trust-item">
                                <div class="icon-circle" aria-hidden="true">{"\u{1F465}"}</div>
                                <AnimatedCounter end={1200} suffix="+ Families Protected" class={classes!("trust-counter")} />
                                <p>{"Trusted by families across San Mateo, Burlingame, Foster City, and Redwood City."}</p>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.3}>
                            <div class="trust-item">
                                <div class="icon-circle" aria-hidden="true">{"\u{1F3C6}"}</div>
                                <h3>{"Top-Rated Agent"}</h3>
                                <p>{"Consistently rated 5 stars for exceptional service and personalized attention."}</p>
                            </div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container" style="text-align: center;">
                    <AnimatedSection kind={RevealKind::FadeUp}>
                        <h2 class="section-title">{"Comprehensive Personal Lines Insurance in San Mateo"}</h2>
                        <p class="section-lead">
                            {"From auto and home insurance to umbrella policies, I provide personalized coverage \
                              solutions tailored to your lifestyle and budget."}
                        </p>
                    </AnimatedSection>
                    <div class="grid-4" style="text-align: left; margin-bottom: 3rem;">
                        { for SERVICE_PREVIEWS.iter().enumerate().map(|(i, &(title, description))| {
                            html! {
                                <AnimatedSection kind={RevealKind::FadeUp} delay={i as f64 * 0.1}>
                                    <div class="service-preview" onclick={go_services.clone()}>
                                        <div class="tile" aria-hidden="true">{"\u{1F6E1}"}</div>
                                        <h3>{ title }</h3>
                                        <p>{ description }</p>
                                    </div>
                                </AnimatedSection>
                            }
                        }) }
                    </div>
                    <AnimatedSection kind={RevealKind::Scale}>
                        <button class="view-all-btn" onclick={go_services.clone()}>
                            {"View All Services"}
                        </button>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section gradient-bg cta-band">
                <div
                    style={format!(
                        "position: absolute; inset: 0; opacity: 0.1; \
                         background: linear-gradient(90deg, transparent, #fff, transparent); \
                         transform: translateY({}px) skewY(-12deg);",
                        parallax_offset * 0.3
                    )}
                    aria-hidden="true"
                />
                <div class="container" style="position: relative;">
                    <AnimatedSection kind={RevealKind::FadeUp}>
                        <h2>{"Ready to Protect What Matters Most?"}</h2>
                        <p class="section-lead">
                            {"Get a personalized insurance quote tailored to your needs. \
                              I'm here to help you find the right coverage at the right price."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <div class="btn-row">
                            <button class="btn btn-light" onclick={go_contact}>
                                {"Get Your Free Quote"}
                            </button>
                            <a href="tel:+16504651676" class="btn btn-blue" aria-label="Call us at 650-465-1676">
                                {"Call (650) 465-1676"}
                            </a>
                        </div>
                    </AnimatedSection>
                </div>
            </section>
        </div>
    }
}
