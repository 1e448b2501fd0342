use chrono::{Datelike, Utc};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated::AnimatedSection;
use crate::components::icons::{Icon, IconKind};
use crate::content::{
    Content, FinalCtaContent, FooterContent, HeroContent, PainContent, SolutionContent,
    StepsContent,
};

#[derive(Properties, PartialEq)]
struct HeroProps {
    hero: HeroContent,
    on_open_booking: Callback<MouseEvent>,
}

#[function_component(HeroSection)]
fn hero_section(props: &HeroProps) -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="container">
                <AnimatedSection>
                    <Icon kind={IconKind::Trash2} class="hero-icon" />
                    <h1>{ &props.hero.title }</h1>
                </AnimatedSection>
                <AnimatedSection delay_ms={200}>
                    <p class="hero-subtitle">{ &props.hero.subtitle }</p>
                </AnimatedSection>
                <div class="hero-actions">
                    <AnimatedSection delay_ms={400}>
                        <button class="cta-primary" onclick={props.on_open_booking.clone()}>
                            { &props.hero.cta }
                        </button>
                    </AnimatedSection>
                    <AnimatedSection delay_ms={600}>
                        <a href="#solution" class="cta-secondary">{ &props.hero.cta2 }</a>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PainProps {
    pain: PainContent,
}

#[function_component(PainSection)]
fn pain_section(props: &PainProps) -> Html {
    html! {
        <section class="pain">
            <div class="container">
                <AnimatedSection>
                    <h2>{ &props.pain.title }</h2>
                </AnimatedSection>
                <div class="pain-grid">
                    { for props.pain.cards.iter().enumerate().map(|(idx, card)| html! {
                        <AnimatedSection delay_ms={idx as u32 * 150 + 100}>
                            <div class="pain-card">
                                <Icon kind={card.icon} class="card-icon" />
                                <h3>{ &card.title }</h3>
                                <p>{ &card.desc }</p>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SolutionProps {
    solution: SolutionContent,
    steps: StepsContent,
}

#[function_component(SolutionSection)]
fn solution_section(props: &SolutionProps) -> Html {
    let step_count = props.steps.steps.len();

    html! {
        <section id="solution" class="solution">
            <div class="container">
                <AnimatedSection>
                    <h2>{ &props.solution.title }</h2>
                </AnimatedSection>
                <div class="solution-grid">
                    { for props.solution.cards.iter().enumerate().map(|(idx, card)| html! {
                        <AnimatedSection delay_ms={idx as u32 * 150 + 100}>
                            <div class="solution-card">
                                <Icon kind={card.icon} class="card-icon" />
                                <h3>{ &card.title }</h3>
                                <p>{ &card.desc }</p>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>

                <AnimatedSection delay_ms={400}>
                    <h3 class="steps-title">{ &props.steps.title }</h3>
                </AnimatedSection>

                <div class="steps-row">
                    { for props.steps.steps.iter().enumerate().map(|(idx, step)| {
                        let last = idx + 1 == step_count;
                        html! {
                            <AnimatedSection delay_ms={idx as u32 * 200 + 500} class="step-slot">
                                <div class="step-card">
                                    <div class="step-num">{ step.num.to_string() }</div>
                                    <h4>{ &step.title }</h4>
                                    <p>{ &step.desc }</p>
                                </div>
                                // Connector between consecutive steps; flipped for RTL in CSS.
                                { if !last {
                                    html! {
                                        <div class="step-arrow">
                                            <Icon kind={IconKind::ArrowRight} />
                                        </div>
                                    }
                                } else {
                                    html! {}
                                } }
                            </AnimatedSection>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FinalCtaProps {
    final_cta: FinalCtaContent,
    on_open_booking: Callback<MouseEvent>,
}

#[function_component(FinalCtaSection)]
fn final_cta_section(props: &FinalCtaProps) -> Html {
    html! {
        <section id="contact" class="final-cta">
            <div class="container">
                <AnimatedSection>
                    <h2>{ &props.final_cta.title }</h2>
                </AnimatedSection>
                <AnimatedSection delay_ms={200}>
                    <p class="final-cta-subtitle">{ &props.final_cta.subtitle }</p>
                </AnimatedSection>
                <AnimatedSection delay_ms={400}>
                    <button class="cta-urgent" onclick={props.on_open_booking.clone()}>
                        { &props.final_cta.cta }
                    </button>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct FooterProps {
    footer: FooterContent,
}

#[function_component(PageFooter)]
fn page_footer(props: &FooterProps) -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <p>{ format!("© {} {}", year, props.footer.copyright) }</p>
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Content,
    pub on_open_booking: Callback<MouseEvent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <main>
                <HeroSection
                    hero={props.content.hero.clone()}
                    on_open_booking={props.on_open_booking.clone()}
                />
                <PainSection pain={props.content.pain.clone()} />
                <SolutionSection
                    solution={props.content.solution.clone()}
                    steps={props.content.steps.clone()}
                />
                <FinalCtaSection
                    final_cta={props.content.final_cta.clone()}
                    on_open_booking={props.on_open_booking.clone()}
                />
            </main>
            <PageFooter footer={props.content.footer.clone()} />
        </>
    }
}
