use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};
use crate::hooks::use_parallax;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_navigate: Callback<Page>,
}

struct Coverage {
    icon: &'static str,
    title: &'static str,
    items: [&'static str; 6],
}

const COVERAGES: &[Coverage] = &[
    Coverage {
        icon: "\u{1F697}",
        title: "Auto Insurance Coverage",
        items: [
            "Liability coverage (required in CA)",
            "Collision and comprehensive",
            "Uninsured/underinsured motorist",
            "Medical payments coverage",
            "Personal injury protection",
            "Rental car reimbursement",
        ],
    },
    Coverage {
        icon: "\u{1F3E0}",
        title: "Home Insurance Coverage",
        items: [
            "Dwelling and structure protection",
            "Personal property coverage",
            "Liability and medical payments",
            "Additional living expenses",
            "Earthquake coverage options",
            "Valuable items protection",
        ],
    },
    Coverage {
        icon: "\u{1F6E1}",
        title: "Renters Insurance Coverage",
        items: [
            "Personal belongings protection",
            "Liability coverage",
            "Medical payments to others",
            "Additional living expenses",
            "Identity theft coverage",
            "Off-premises coverage",
        ],
    },
    Coverage {
        icon: "\u{2602}",
        title: "Umbrella Insurance Coverage",
        items: [
            "Excess liability protection",
            "Covers multiple policies",
            "Worldwide coverage",
            "Legal defense costs",
            "Personal injury protection",
            "Property damage coverage",
        ],
    },
];

const REASONS: &[(&str, &str, &str)] = &[
    (
        "\u{1F465}",
        "Local Expertise",
        "Deep understanding of San Mateo and Bay Area insurance requirements, from earthquake \
         coverage to California-specific regulations.",
    ),
    (
        "\u{1F6E1}",
        "Personalized Service",
        "Every policy is tailored to your unique situation. I take time to understand your needs \
         and find coverage that fits your lifestyle and budget.",
    ),
    (
        "\u{2705}",
        "Claims Support",
        "When you need to file a claim, I'm here to guide you through the process and advocate \
         for your interests every step of the way.",
    ),
];

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let parallax_offset = use_parallax(0.5);

    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    html! {
        <div>
            <style>
                {r#"
                    .coverage-grid {
                        display: grid; grid-template-columns: 1fr 1fr; gap: 3rem;
                    }
                    .coverage-card {
                        background: #fff; border-radius: 16px;
                        padding: 2rem;
                        box-shadow: 0 10px 24px rgba(15, 30, 80, 0.08);
                        transition: transform 0.3s ease;
                    }
                    .coverage-card:hover { transform: translateY(-5px); }
                    .coverage-card header {
                        display: flex; align-items: center; gap: 1rem; margin-bottom: 1.5rem;
                    }
                    .coverage-card header .tile {
                        width: 3rem; height: 3rem;
                        background: #1d4ed8; color: #fff;
                        border-radius: 10px;
                        display: flex; align-items: center; justify-content: center;
                        font-size: 1.3rem;
                    }
                    .coverage-card h3 { font-size: 1.5rem; }
                    .coverage-card li {
                        display: flex; align-items: center; gap: 0.75rem;
                        color: #3a4358; padding: 0.35rem 0;
                    }
                    .coverage-card li .check { color: #16a34a; }
                    .reason { text-align: center; }
                    .reason h3 { font-size: 1.25rem; margin: 1rem 0 0.75rem; }
                    .reason p { color: #55607a; }
                    @media (max-width: 1023px) {
                        .coverage-grid { grid-template-columns: 1fr; gap: 2rem; }
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
                        <h1 class="page-title">{"Personal Lines Insurance Services in San Mateo"}</h1>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                        <p class="page-lead">
                            {"From auto and home insurance to renters and umbrella policies, I provide comprehensive \
                              personal lines coverage tailored to your lifestyle. Serving San Mateo, Burlingame, \
                              Foster City, Redwood City, and beyond."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"Comprehensive Coverage Options"}</h2>
                        <p class="section-lead">
                            {"Each policy is customized to your specific needs, ensuring you have the right \
                              protection at the right price."}
                        </p>
                    </AnimatedSection>
                    <div class="coverage-grid">
                        { for COVERAGES.iter().enumerate().map(|(i, coverage)| {
                            html! {
                                <AnimatedSection kind={RevealKind::FadeUp} delay={(i + 1) as f64 * 0.1}>
                                    <div class="coverage-card">
                                        <header>
                                            <AnimatedSection kind={RevealKind::Scale} delay={(i + 2) as f64 * 0.1}>
                                                <div class="tile" aria-hidden="true">{ coverage.icon }</div>
                                            </AnimatedSection>
                                            <h3>{ coverage.title }</h3>
                                        </header>
                                        <ul>
                                            { for coverage.items.iter().map(|&item| html! {
                                                <li>
                                                    <span class="check" aria-hidden="true">{"\u{2713}"}</span>
                                                    <span>{ item }</span>
                                                </li>
                                            }) }
                                        </ul>
                                    </div>
                                </AnimatedSection>
                            }
                        }) }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"Why Choose Me for Your Bay Area Insurance Needs?"}</h2>
                    </AnimatedSection>
                    <div class="grid-3">
                        { for REASONS.iter().enumerate().map(|(i, &(icon, title, text))| {
                            html! {
                                <AnimatedSection kind={RevealKind::FadeUp} delay={(i + 1) as f64 * 0.1}>
                                    <div class="reason">
                                        <AnimatedSection kind={RevealKind::Scale} delay={(i + 2) as f64 * 0.1}>
                                            <div class="icon-circle" aria-hidden="true">{ icon }</div>
                                        </AnimatedSection>
                                        <h3>{ title }</h3>
                                        <p>{ text }</p>
                                    </div>
                                </AnimatedSection>
                            }
                        }) }
                    </div>
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
                        <h2>{"Ready to Get Protected?"}</h2>
                        <p class="section-lead">
                            {"Get personalized insurance quotes for all your coverage needs. \
                              I'll help you find the right protection at competitive rates."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <div class="btn-row">
                            <button class="btn btn-light" onclick={go_contact}>
                                {"Get Free Quotes"}
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
