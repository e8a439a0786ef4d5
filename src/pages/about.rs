use yew::prelude::*;

use crate::components::animated::{AnimatedSection, RevealKind};
use crate::components::parallax::ParallaxImage;
use crate::hooks::use_parallax;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_navigate: Callback<Page>,
}

const VALUES: &[(&str, &str, &str)] = &[
    (
        "\u{2764}",
        "Personal Care",
        "Every client receives personalized attention and customized insurance solutions \
         tailored to their unique needs and budget.",
    ),
    (
        "\u{1F6E1}",
        "Trust & Integrity",
        "We build relationships based on honesty, transparency, and always putting \
         our clients' best interests first.",
    ),
    (
        "\u{1F3C6}",
        "Excellence",
        "We strive for excellence in everything we do, from finding the best coverage \
         to providing outstanding claims support.",
    ),
];

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let parallax_offset = use_parallax(0.5);

    let go_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Contact))
    };

    html! {
        <div>
            <style>
                {r#"
                    .about-story-grid {
                        display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center;
                    }
                    .about-story-grid h2 { font-size: 2.2rem; margin-bottom: 1.5rem; }
                    .about-story-grid p { font-size: 1.1rem; color: #55607a; margin-bottom: 1.25rem; }
                    .about-story-grid .parallax-frame { height: 24rem; border-radius: 16px; }
                    .value-item { text-align: center; }
                    .value-item h3 { font-size: 1.5rem; margin: 1.25rem 0 1rem; }
                    .value-item p { color: #55607a; }
                    .credential-list { margin: 1.5rem 0; }
                    .credential-list li {
                        display: flex; align-items: center; gap: 0.75rem;
                        color: #3a4358; padding: 0.4rem 0;
                    }
                    .credential-list .mark { color: #1d4ed8; }
                    .connect-card {
                        background: #fff; border-radius: 10px;
                        padding: 1.5rem; text-align: center;
                        box-shadow: 0 10px 24px rgba(15, 30, 80, 0.08);
                        height: 100%;
                        transition: transform 0.3s ease;
                    }
                    .connect-card:hover { transform: translateY(-5px); }
                    .connect-card h3 { font-size: 1.1rem; margin: 1rem 0 0.5rem; }
                    .connect-card a, .connect-card .place { color: #1d4ed8; font-weight: 600; }
                    .connect-card a:hover { color: #1e40af; }
                    @media (max-width: 1023px) {
                        .about-story-grid { grid-template-columns: 1fr; gap: 2.5rem; }
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
                        <h1 class="page-title">{"About Ethan Li Insurance"}</h1>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.4}>
                        <p class="page-lead">
                            {"With over 15 years of experience serving San Mateo and the surrounding Bay Area, I'm \
                              dedicated to protecting what matters most to you and your family with personalized \
                              insurance solutions."}
                        </p>
                    </AnimatedSection>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="about-story-grid">
                        <AnimatedSection kind={RevealKind::FadeRight} delay={0.2}>
                            <h2>{"My Story"}</h2>
                            <p>
                                {"I started my insurance career with a simple mission: to provide local families \
                                  with the personal attention and expert guidance they deserve when protecting \
                                  their most valuable assets."}
                            </p>
                            <p>
                                {"Having lived in the Bay Area for over two decades, I understand the unique \
                                  challenges our community faces - from earthquake risks to high property values. \
                                  This local knowledge, combined with my commitment to exceptional service, has \
                                  helped me build lasting relationships with over 1,200 families across San Mateo \
                                  County."}
                            </p>
                            <p>
                                {"When you work with me, you're not just getting an insurance policy, you're \
                                  gaining a trusted advisor who will be there for you when you need it most."}
                            </p>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeLeft} delay={0.4}>
                            <ParallaxImage
                                src="/assets/office.png"
                                alt="Professional insurance agent Ethan Li in San Mateo office"
                                speed={0.0}
                            />
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section section-light">
                <div class="container">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"Our Mission & Core Values"}</h2>
                        <p class="section-lead">
                            {"Everything we do is guided by our commitment to protecting families and building \
                              lasting relationships in the San Mateo community."}
                        </p>
                    </AnimatedSection>
                    <div class="grid-3">
                        { for VALUES.iter().enumerate().map(|(i, &(icon, title, text))| {
                            html! {
                                <AnimatedSection kind={RevealKind::FadeUp} delay={(i + 1) as f64 * 0.1}>
                                    <div class="value-item">
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

            <section class="section">
                <div class="container">
                    <div class="about-story-grid">
                        <AnimatedSection kind={RevealKind::FadeRight} delay={0.2}>
                            <ParallaxImage
                                src="/assets/family.png"
                                alt="Insurance agent portrait"
                                speed={0.0}
                            />
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeLeft} delay={0.4}>
                            <h2>{"Meet Ethan Li"}</h2>
                            <p>
                                {"As a licensed insurance professional with deep roots in San Mateo, I bring both \
                                  expertise and genuine care to every client relationship. My approach is simple: \
                                  listen first, then find the right solutions."}
                            </p>
                            <ul class="credential-list">
                                <li>
                                    <span class="mark" aria-hidden="true">{"\u{1F464}"}</span>
                                    {"Licensed Insurance Agent (CA License #0A12345)"}
                                </li>
                                <li>
                                    <span class="mark" aria-hidden="true">{"\u{1F4CD}"}</span>
                                    {"San Mateo Resident for 20+ Years"}
                                </li>
                                <li>
                                    <span class="mark" aria-hidden="true">{"\u{1F3C6}"}</span>
                                    {"Top Producer & Customer Service Awards"}
                                </li>
                            </ul>
                            <p>
                                {"When I'm not helping families protect their futures, you'll find me volunteering \
                                  at local community events, hiking the beautiful Bay Area trails, or spending time \
                                  with my own family right here in San Mateo."}
                            </p>
                        </AnimatedSection>
                    </div>
                </div>
            </section>

            <section class="section" style="background: #eff6ff;">
                <div class="container" style="max-width: 56rem;">
                    <AnimatedSection kind={RevealKind::FadeUp} class={classes!("section-head")}>
                        <h2 class="section-title">{"Let's Connect"}</h2>
                        <p class="section-lead">
                            {"Ready to discuss your insurance needs? I'm here to help with personalized service \
                              and expert guidance."}
                        </p>
                    </AnimatedSection>
                    <div class="grid-3">
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.1}>
                            <div class="connect-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.2}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{260E}"}</div>
                                </AnimatedSection>
                                <h3>{"Call Me"}</h3>
                                <a href="tel:+16504651676" aria-label="Call us at 650-465-1676">
                                    {"(650) 465-1676"}
                                </a>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                            <div class="connect-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.3}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{2709}"}</div>
                                </AnimatedSection>
                                <h3>{"Email Me"}</h3>
                                <a href="mailto:ethan@ethanli.com" aria-label="Email us at ethan@ethanli.com">
                                    {"ethan@ethanli.com"}
                                </a>
                            </div>
                        </AnimatedSection>
                        <AnimatedSection kind={RevealKind::FadeUp} delay={0.3}>
                            <div class="connect-card">
                                <AnimatedSection kind={RevealKind::Scale} delay={0.4}>
                                    <div class="icon-circle" aria-hidden="true">{"\u{1F4CD}"}</div>
                                </AnimatedSection>
                                <h3>{"Visit Me"}</h3>
                                <p class="place">{"123 Main St, San Mateo, CA"}</p>
                            </div>
                        </AnimatedSection>
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
                        <h2>{"Ready to Experience the Difference?"}</h2>
                        <p class="section-lead">
                            {"Let me show you what personalized insurance service looks like. Get your free quote \
                              and discover the peace of mind that comes with proper protection."}
                        </p>
                    </AnimatedSection>
                    <AnimatedSection kind={RevealKind::FadeUp} delay={0.2}>
                        <div class="btn-row">
                            <button class="btn btn-light" onclick={go_contact}>
                                {"Get Your Free Quote"}
                                <span aria-hidden="true">{"\u{2192}"}</span>
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
