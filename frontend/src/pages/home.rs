use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::animated_section::{AnimatedSection, Variant};
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::icons::{Icon, IconKind};
use crate::content::{
    BRAND, DIFFERENTIATORS, HERO_IMAGE, MISSION, PARTNERS, SERVICES, TAGLINE, TEAM_IMAGE,
    VISION, VISION_IMAGE,
};

/// Delay before the hero switches to its entered state, so the browser has
/// painted the starting frame and the transition actually runs.
const HERO_ENTRANCE_DELAY_MS: u32 = 30;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <About />
            <ServicesGrid />
            <Partners />
            <MigrationCta />
            <ContactSection />
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #0f172a, #1e293b);
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .section {
                        padding: 5rem 1rem;
                    }
                    .section.alt {
                        background: #1e293b;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        font-weight: 700;
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .muted {
                        color: #9ca3af;
                    }
                    .rounded {
                        border-radius: 0.75rem;
                        max-width: 100%;
                    }
                    .shadow {
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    .spaced {
                        margin-bottom: 2rem;
                    }

                    /* Scroll reveal */
                    .reveal {
                        opacity: 0;
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal-fade {
                        transform: translateY(20px);
                    }
                    .reveal-scale {
                        transform: scale(0.9);
                    }
                    .reveal.is-visible {
                        opacity: 1;
                        transform: none;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.2;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        text-align: center;
                        padding: 0 1rem;
                        opacity: 0;
                        transform: translateY(30px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .hero-content.entered {
                        opacity: 1;
                        transform: none;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #93c5fd;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        background: #3b82f6;
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: all 0.3s ease;
                    }
                    .hero-cta:hover {
                        background: #2563eb;
                        transform: scale(1.05);
                    }

                    /* About */
                    .two-column {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    .card {
                        background: #334155;
                        padding: 2rem;
                        border-radius: 0.75rem;
                    }
                    .card-title {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                        color: #60a5fa;
                    }
                    .differentiator {
                        margin-bottom: 1.5rem;
                    }
                    .differentiator h4 {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }

                    /* Services */
                    .services-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .service-card {
                        background: #1e293b;
                        border-radius: 0.75rem;
                        height: 100%;
                        display: flex;
                        flex-direction: column;
                        overflow: hidden;
                        transition: background 0.3s ease;
                    }
                    .service-card:hover {
                        background: #334155;
                    }
                    .service-image {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }
                    .service-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .service-image-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, #1e293b, transparent);
                    }
                    .service-body {
                        padding: 2rem;
                    }
                    .service-icon {
                        width: 3rem;
                        height: 3rem;
                        color: #60a5fa;
                        margin-bottom: 1rem;
                    }
                    .service-title {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.75rem;
                    }

                    /* Partners */
                    .partners-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                        align-items: center;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .partner-tile {
                        background: #fff;
                        padding: 3rem;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .partner-tile img {
                        height: 3rem;
                        width: auto;
                    }

                    /* Call to action */
                    .cta-banner {
                        background: linear-gradient(to right, #2563eb, #1e40af);
                        border-radius: 1rem;
                        padding: 3rem;
                        text-align: center;
                    }
                    .cta-banner h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .cta-banner p {
                        font-size: 1.25rem;
                        margin: 0 auto 2rem;
                        max-width: 42rem;
                    }
                    .cta-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        background: #fff;
                        color: #2563eb;
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .cta-link:hover {
                        background: #eff6ff;
                    }
                    .cta-arrow {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    /* Contact */
                    .contact-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .contact-header h2 {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .contact-card {
                        background: #1e293b;
                        padding: 2rem;
                        border-radius: 0.75rem;
                    }
                    .contact-form {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        background: #334155;
                        color: #fff;
                        border: none;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        font: inherit;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #3b82f6;
                    }
                    .submit-button {
                        background: #3b82f6;
                        color: #fff;
                        border: none;
                        padding: 0.75rem 2rem;
                        border-radius: 0.5rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .submit-button:hover {
                        background: #2563eb;
                    }
                    .submit-button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .form-feedback {
                        text-align: center;
                    }
                    .form-feedback.success {
                        color: #4ade80;
                    }
                    .form-feedback.error {
                        color: #f87171;
                    }

                    /* Footer */
                    .site-footer {
                        background: #0f172a;
                        padding: 3rem 1rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .footer-heading {
                        font-size: 1.125rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .footer-list {
                        list-style: none;
                        padding: 0;
                        line-height: 2;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        margin-top: 3rem;
                        padding-top: 2rem;
                        text-align: center;
                    }

                    @media (min-width: 768px) {
                        .section, .site-footer {
                            padding-left: 2rem;
                            padding-right: 2rem;
                        }
                        .two-column, .partners-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .services-grid, .contact-form {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .contact-form .full-width {
                            grid-column: span 2;
                        }
                        .footer-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                    }
                    @media (min-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(3, 1fr);
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(HERO_ENTRANCE_DELAY_MS, move || entered.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    html! {
        <header class="hero">
            <div class="hero-background">
                <img src={HERO_IMAGE} alt="Data Center" />
            </div>
            <div class={classes!("hero-content", (*entered).then_some("entered"))}>
                <h1>{ BRAND }</h1>
                <p class="hero-subtitle">{ TAGLINE }</p>
                <a href="#contact" class="hero-cta">{"Get Started"}</a>
            </div>
        </header>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section class="section alt">
            <div class="container">
                <AnimatedSection>
                    <h2 class="section-title">{ format!("About {}", BRAND) }</h2>
                </AnimatedSection>

                <div class="two-column">
                    <AnimatedSection>
                        <img src={TEAM_IMAGE} alt="Cloud Technology Team" class="rounded shadow spaced" />
                        <div class="card">
                            <h3 class="card-title">{"Our Mission"}</h3>
                            <p class="muted">{ MISSION }</p>
                        </div>
                    </AnimatedSection>

                    <AnimatedSection>
                        <div class="card spaced">
                            <h3 class="card-title">{"Our Vision"}</h3>
                            <p class="muted spaced">{ VISION }</p>
                            <img src={VISION_IMAGE} alt="Cloud Innovation" class="rounded shadow" />
                        </div>

                        <div class="card">
                            <h3 class="card-title">{"Key Differentiators"}</h3>
                            {
                                DIFFERENTIATORS.iter().map(|item| html! {
                                    <div class="differentiator" key={item.title}>
                                        <h4>{ item.title }</h4>
                                        <p class="muted">{ item.description }</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    html! {
        <section class="section">
            <AnimatedSection>
                <h2 class="section-title">{"Our Services"}</h2>
            </AnimatedSection>

            <div class="container">
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <AnimatedSection key={service.title} variant={Variant::ScaleIn}>
                                <div class="service-card">
                                    <div class="service-image">
                                        <img src={service.image} alt={service.title} />
                                        <div class="service-image-fade"></div>
                                    </div>
                                    <div class="service-body">
                                        <Icon kind={service.icon} class="service-icon" />
                                        <h3 class="service-title">{ service.title }</h3>
                                        <p class="muted">{ service.description }</p>
                                    </div>
                                </div>
                            </AnimatedSection>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(Partners)]
fn partners() -> Html {
    html! {
        <section class="section alt">
            <div class="container">
                <AnimatedSection>
                    <h2 class="section-title">{"Our Partners"}</h2>
                </AnimatedSection>

                <div class="partners-grid">
                    {
                        PARTNERS.iter().map(|partner| html! {
                            <AnimatedSection key={partner.name}>
                                <div class="partner-tile">
                                    <img src={partner.logo} alt={format!("{} Logo", partner.name)} />
                                </div>
                            </AnimatedSection>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}

#[function_component(MigrationCta)]
fn migration_cta() -> Html {
    html! {
        <section class="section">
            <div class="container">
                <AnimatedSection>
                    <div class="cta-banner">
                        <h2>{"Plan Your Cloud Migration"}</h2>
                        <p>{"Ready to transform your business with cloud technology? Let's discuss your migration strategy."}</p>
                        <a href="#contact" class="cta-link">
                            {"Contact Us"}
                            <Icon kind={IconKind::ArrowRight} class="cta-arrow" />
                        </a>
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
fn contact_section() -> Html {
    html! {
        <section id="contact" class="section">
            <div class="container">
                <AnimatedSection>
                    <div class="contact-header">
                        <h2>{"Get In Touch"}</h2>
                        <p class="muted">{"Ready to transform your business? Contact us today."}</p>
                    </div>
                </AnimatedSection>

                <AnimatedSection>
                    <div class="contact-card">
                        <ContactForm />
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}
