use yew::prelude::*;

use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
    index: usize,
}

/// One reason card. Toggle-bound: it plays forward entering the viewport and
/// reverses when scrolled back out.
#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let card_ref = use_node_ref();
    let reveal = use_scroll_reveal(card_ref.clone(), RepeatPolicy::EveryCrossing, 100.0);
    let delay_style = format!("transition-delay: {}ms;", props.index * 150);

    html! {
        <div ref={card_ref} class={classes!("why-us-card", reveal.class())} style={delay_style}>
            <div class="why-us-card-index">{ format!("{:02}", props.index + 1) }</div>
            <h3>{ props.title }</h3>
            <p>{ props.description }</p>
        </div>
    }
}

const FEATURES: [(&str, &str); 3] = [
    (
        "Customized AI",
        "Tailored AI solutions designed specifically for your business needs and goals.",
    ),
    (
        "Expert Consultancy",
        "Guidance from experienced consultants throughout your AI transformation journey.",
    ),
    (
        "End-to-End Service",
        "Complete support from initial consultation through deployment and beyond.",
    ),
];

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let heading_ref = use_node_ref();
    let heading_reveal = use_scroll_reveal(heading_ref.clone(), RepeatPolicy::Once, 100.0);

    html! {
        <section class="why-us">
            <div class="why-us-inner">
                <h2 ref={heading_ref} class={classes!("why-us-heading", heading_reveal.class())}>
                    {"Why "}<span class="accent">{"Us?"}</span>
                </h2>
                <div class="why-us-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (title, description))| html! {
                        <FeatureCard key={i} index={i} title={*title} description={*description} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .why-us {
                    background: #ffffff;
                    padding: 6rem 2rem;
                }
                .why-us-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .why-us-heading {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #003366;
                    text-align: center;
                    margin-bottom: 4rem;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .why-us-heading .accent { color: #FF6600; }
                .why-us-heading.unrevealed { opacity: 0; transform: translateY(2rem); }
                .why-us-heading.revealed { opacity: 1; transform: translateY(0); }
                .why-us-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .why-us-card {
                    background: #f9fafb;
                    border-radius: 0.75rem;
                    padding: 2.5rem 2rem;
                    border-top: 4px solid #FF6600;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .why-us-card.unrevealed { opacity: 0; transform: translateY(3rem) scale(0.95); }
                .why-us-card.revealed { opacity: 1; transform: translateY(0) scale(1); }
                .why-us-card-index {
                    font-size: 2rem;
                    font-weight: 700;
                    color: rgba(0, 51, 102, 0.15);
                }
                .why-us-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #003366;
                    margin: 0.75rem 0;
                }
                .why-us-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
