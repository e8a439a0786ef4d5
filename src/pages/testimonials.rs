use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};
use crate::components::carousel::{render_stars, Testimonial, TestimonialCarousel};
use crate::components::counter::AnimatedCounter;
use crate::hooks::use_parallax;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub on_navigate: Callback<Page>,
}

const REVIEWS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Sarah Chen",
        location: "San Mateo, CA",
        rating: 5,
        text: "Outstanding service from start to finish! When I moved to San Mateo, I needed new \
               insurance quickly. The agent took time to understand my needs and found me better \
               coverage at a lower price than my previous provider.",
    },
    Testimonial {
        id: 2,
        name: "Michael Rodriguez",
        location: "Burlingame, CA",
        rating: 5,
        text: "As a first-time homeowner in the Bay Area, I was overwhelmed by insurance options. \
               The personalized approach made all the difference - explaining earthquake coverage, \
               liability limits, and helping me understand what I actually needed.",
    },
    Testimonial {
        id: 3,
        name: "Jennifer Liu",
        location: "Foster City, CA",
        rating: 5,
        text: "Been working with this agent for over 5 years now. What sets them apart is the \
               ongoing relationship - not just selling a policy and disappearing. When I had a \
               claim last year, they walked me through everything.",
    },
    Testimonial {
        id: 4,
        name: "David Thompson",
        location: "Redwood City, CA",
        rating: 5,
        text: "Switched our family's auto and home insurance here three years ago and couldn't be \
               happier. The agent really understands the unique challenges of Bay Area living - \
               from earthquake coverage to high-value home protection.",
    },
    Testimonial {
        id: 5,
        name: "Maria Gonzalez",
        location: "San Mateo, CA",
        rating: 5,
        text: "Professional, knowledgeable, and genuinely cares about clients. When my son started \
               driving, they helped me understand all the options for young driver coverage and \
               found ways to keep our premiums reasonable.",
    },
    Testimonial {
        id: 6,
        name: "James Park",
        location: "Belmont, CA",
        rating: 5,
        text: "Exceptional claims support when we had water damage last spring. The agent was \
               proactive, checking in throughout the process and ensuring we got everything we \
               were entitled to. This is how insurance should work.",
    },
];

const TRUST_BADGES: &[(&str, &str, &str)] = &[
    (
        "24/7",
        "Claims Support",
        "Around-the-clock assistance when you need to file a claim or have questions.",
    ),
    (
        "CA",
        "Local Expertise",
        "Deep knowledge of California insurance requirements and Bay Area risks.",
    ),
    (
        "$",
        "Competitive Rates",
        "We shop multiple carriers to find you the best coverage at the best price.",
    ),
    (
        "\u{2665}",
        "Personal Service",
        "You're not just a policy number - you're part of our San Mateo family.",
    ),
];

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let parallax_offset = use_parallax(0.5);

    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    html! {
        <div>
            <style>
                {r#"
                    .stat-figure { font-size: 2.5rem; font-weight: 700; color: #1d4ed8; }
                    .stat-label { color: #55607a; font-weight: 500; margin-top: 0.25rem; }
                    .badge-circle {
                        width: 4rem; height: 4rem;
                        background: #1d4ed8; color: #fff;
                        border-radius: 50%;
                        display: flex; align-items: center; justify-content: center;
                        margin: 0 auto 1rem;
                        font-size: 1.2rem; font-weight: 700;
                        transition: transform 0.3s ease;
                    }
                    .trust-badge:hover .badge-circle { transform: scale(1.1) rotate(5deg); }
                    .trust-badge { text-align: center; }
                    .trust-badge h3 { font-size: 1.1rem; margin-bottom: 0.5rem; }
                    .trust-badge p { color: #55607a; font-size: 0.9rem; }
                    .featured-review {
                        background: #1d4ed8; color: #fff;
                        border-radius: 16px;
                        padding: 3rem;
                        text-align: center;
                        position: relative; overflow: hidden;
                        transition: transform 0.3s ease;
                    }
                    .featured-review:hover { transform: scale(1.02); }
                    .featured-review .quote-mark { font-size: 4rem; color: #93c5fd; line-height: 1; }
                    .featured-review blockquote {
                        font-size: 1.5rem; font-weight: 300; font-style: italic;
                        line-height: 1.6; margin: 1.5rem 0 2rem;
                    }
                    .featured-review .stars { display: flex; justify-content: center; margin-bottom: 1.5rem; }
                    .featured-review cite { font-style: normal; }
                    .featured-review cite .who { font-size: 1.25rem; font-weight: 600; }
                    .featured-review cite .where { color: #bfdbfe; }
                    .cta-dark { background: #111827; }
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
                        <h1 class="page-title">{"Client Reviews & Testimonials"}</h1>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                        <p class="page-lead">
                            {"Hear from San Mateo clients who trust me to protect their homes, cars, and families \
                              with reliable coverage and exceptional service."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <div class="grid-4" style="text-align: center;">
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.1}>
                            <AnimatedCounter end={15} suffix="+" class={classes!("stat-figure")} />
                            <div class="stat-label">{"Years of Service"}</div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                            <AnimatedCounter end={1200} suffix="+" class={classes!("stat-figure")} />
                            <div class="stat-label">{"Families Protected"}</div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.3}>
                            <div class="stat-figure">{"4.9"}</div>
                            <div class="stat-label">{"Average Rating"}</div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                            <AnimatedCounter end={98} suffix="%" class={classes!("stat-figure")} />
                            <div class="stat-label">{"Client Retention"}</div>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"What Our San Mateo Clients Say"}</h2>
                        <p class="section-lead">
                            {"Real reviews from real families across San Mateo County who trust us with their \
                              insurance needs."}
                        </p>
                    </AnimatedSection>
                    <TestimonialCarousel entries={REVIEWS.to_vec()} />
                </div>
            </section>

            <section class="section" style="background: #eff6ff;">
                <div class="container">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"Why Families Choose Us"}</h2>
                    </AnimatedSection>
                    <div class="grid-4">
                        { for TRUST_BADGES.iter().enumerate().map(|(i, &(badge, title, text))| {
                            html! {
                                <AnimatedSection kind={RevealKind::FadeUp} delay={(i + 1) as f64 * 0.1}>
                                    <div class="trust-badge">
                                        <AnimatedSection kind={RevealKind::Scale} delay={(i + 2) as f64 * 0.1}>
                                            <div class="badge-circle" aria-hidden="true">{ badge }</div>
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

            <section class="section">
                <div class="container" style="max-width: 56rem;">
                    <AnimatedSection kind={RevealKind::Scale}>
                        <div class="featured-review">
                            <div class="quote-mark" aria-hidden="true">{"\u{201C}"}</div>
                            <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                                <blockquote>
                                    {"\"This is exactly what insurance should be - personal service from someone \
                                      who actually cares about protecting your family. The peace of mind is worth \
                                      everything.\""}
                                </blockquote>
                            </AnimatedSection>
                            <div class="stars">{ render_stars(5) }</div>
                            <cite>
                                <div class="who">{"The Johnson Family"}</div>
                                <div class="where">{"San Mateo, CA \u{2022} Home & Auto Insurance"}</div>
                            </cite>
                        </div>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section cta-band cta-dark">
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
                        <h2>{"Ready to Join Our Happy Clients?"}</h2>
                        <p class="section-lead">
                            {"Experience the difference of working with a San Mateo insurance agent who puts your \
                              family's protection first. Get your free quote today."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <div class="btn-row">
                            <button class="btn btn-blue" onclick={go_contact}>
                                {"Get Your Free Quote"}
                            </button>
                            <a href="tel:+16504651676" class="btn btn-light" aria-label="Call us at 650-465-1676">
                                {"Call (650) 465-1676"}
                            </a>
                        </div>
                    </AnimatedSection>
                </div>
            </section>
        </div>
    }
}
