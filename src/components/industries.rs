use yew::prelude::*;

use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};

struct Industry {
    name: &'static str,
    solutions: [(&'static str, &'static str); 3],
}

const INDUSTRIES: [Industry; 5] = [
    Industry {
        name: "Manufacturing",
        solutions: [
            (
                "Streamline Operations",
                "Automate repetitive tasks and optimize production lines with AI.",
            ),
            (
                "Predictive Maintenance",
                "Prevent costly equipment failures before they happen.",
            ),
            (
                "Supply Chain Optimization",
                "Improve logistics and inventory management.",
            ),
        ],
    },
    Industry {
        name: "Retail & E-commerce",
        solutions: [
            (
                "Enhance Customer Experience",
                "Deliver personalized shopping experiences using AI.",
            ),
            (
                "Dynamic Pricing",
                "Adjust pricing strategies based on real-time demand.",
            ),
            (
                "Inventory Forecasting",
                "Prevent overstock or stockouts with smart predictions.",
            ),
        ],
    },
    Industry {
        name: "Finance & Fintech",
        solutions: [
            (
                "Fraud Detection",
                "AI-driven models to identify fraudulent transactions.",
            ),
            (
                "Risk Assessment",
                "Automate risk management for faster decision-making.",
            ),
            (
                "Algorithmic Trading",
                "Data-backed strategies for smarter investments.",
            ),
        ],
    },
    Industry {
        name: "Healthcare",
        solutions: [
            (
                "Revolutionize Patient Care",
                "Predictive diagnostics to improve patient outcomes.",
            ),
            (
                "Resource Management",
                "Optimize staffing and equipment utilization.",
            ),
            (
                "Drug Discovery",
                "Accelerate research with AI-driven insights.",
            ),
        ],
    },
    Industry {
        name: "Service Industry",
        solutions: [
            (
                "Customer Support Automation",
                "Resolve queries faster with intelligent assistants.",
            ),
            (
                "Data-Driven Decision Making",
                "Turn operational data into actionable insight.",
            ),
            (
                "Process Automation",
                "Free your teams from repetitive back-office work.",
            ),
        ],
    },
];

#[derive(Properties, PartialEq)]
struct IndustryCardProps {
    index: usize,
}

#[function_component(IndustryCard)]
fn industry_card(props: &IndustryCardProps) -> Html {
    let card_ref = use_node_ref();
    let reveal = use_scroll_reveal(card_ref.clone(), RepeatPolicy::Once, 80.0);
    let industry = &INDUSTRIES[props.index];
    let delay_style = format!("transition-delay: {}ms;", props.index * 120);

    html! {
        <div ref={card_ref} class={classes!("industry-card", reveal.class())} style={delay_style}>
            <h3>{ industry.name }</h3>
            <ul>
                { for industry.solutions.iter().map(|(title, description)| html! {
                    <li key={*title}>
                        <h4>{ *title }</h4>
                        <p>{ *description }</p>
                    </li>
                }) }
            </ul>
        </div>
    }
}

/// Industry grid: each card reveals once, staggered by its position.
#[function_component(IndustriesSection)]
pub fn industries_section() -> Html {
    html! {
        <section class="industries">
            <div class="industries-inner">
                <h2 class="industries-heading">
                    {"Industries We "}<span class="accent">{"Transform"}</span>
                </h2>
                <div class="industries-grid">
                    { for (0..INDUSTRIES.len()).map(|i| html! {
                        <IndustryCard key={i} index={i} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .industries {
                    background: linear-gradient(to bottom, #f9fafb, #ffffff);
                    padding: 6rem 2rem;
                }
                .industries-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .industries-heading {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #003366;
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .industries-heading .accent { color: #FF6600; }
                .industries-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                }
                .industry-card {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 2rem;
                    box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .industry-card.unrevealed { opacity: 0; transform: translateY(3rem); }
                .industry-card.revealed { opacity: 1; transform: translateY(0); }
                .industry-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #FF6600;
                    margin-bottom: 1rem;
                }
                .industry-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .industry-card h4 {
                    font-weight: 600;
                    color: #003366;
                }
                .industry-card p {
                    color: #4b5563;
                    font-size: 0.95rem;
                }
                "#}
            </style>
        </section>
    }
}
