use yew::prelude::*;

use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};

const ACHIEVEMENTS: [(&str, &str); 4] = [
    (
        "Automated Inventory System for a Global Retail Chain",
        "Reduced stock wastage by 30% and optimized supply chain operations.",
    ),
    (
        "Predictive Analytics for a Major Manufacturing Firm",
        "Enabled the company to prevent equipment breakdowns, saving over $1 million annually.",
    ),
    (
        "Fraud Detection System for a Leading Fintech Company",
        "Decreased fraudulent activities by 40%, enhancing customer trust.",
    ),
    (
        "AI-Based Virtual Healthcare Assistant",
        "Improved patient engagement and care delivery for a large healthcare provider.",
    ),
];

const PROJECTS: [(&str, &str); 2] = [
    (
        "Education AI: Personalized Learning",
        "Our Education AI system is built to provide customized learning paths for \
         students, tailored to their needs and abilities. The platform supports \
         multilingual, interactive learning environments, progress tracking, and career \
         assessments, helping students navigate their educational journey with greater \
         clarity and efficiency.",
    ),
    (
        "REequitiz: Smart Stock Market Decisions",
        "REequitiz is our AI-powered stock market platform that helps individuals make \
         informed decisions about which stocks to invest in and why. By analyzing \
         real-time market data, trends, and stock performance, our platform offers \
         personalized recommendations to guide users in choosing the right stocks based \
         on their investment goals.",
    ),
];

#[derive(Properties, PartialEq)]
struct WorkItemProps {
    title: &'static str,
    description: &'static str,
    index: usize,
    #[prop_or_default]
    project: bool,
}

#[function_component(WorkItem)]
fn work_item(props: &WorkItemProps) -> Html {
    let item_ref = use_node_ref();
    let reveal = use_scroll_reveal(item_ref.clone(), RepeatPolicy::Once, 100.0);
    let delay_style = format!("transition-delay: {}ms;", props.index * 200);
    let class = if props.project { "project-card" } else { "work-item" };

    html! {
        <div ref={item_ref} class={classes!(class, reveal.class())} style={delay_style}>
            <h3>{ props.title }</h3>
            <p>{ props.description }</p>
        </div>
    }
}

/// Portfolio section: past achievements plus the two flagship projects, each
/// revealing once with a stagger as it scrolls into view.
#[function_component(OurWork)]
pub fn our_work() -> Html {
    html! {
        <section class="our-work">
            <div class="our-work-inner">
                <h2 class="our-work-heading">
                    {"Our "}<span class="accent">{"Work"}</span>
                </h2>
                <div class="our-work-grid">
                    { for ACHIEVEMENTS.iter().enumerate().map(|(i, (title, description))| html! {
                        <WorkItem key={i} index={i} title={*title} description={*description} />
                    }) }
                </div>
                <h2 class="our-work-heading projects">
                    {"Flagship "}<span class="accent">{"Projects"}</span>
                </h2>
                <div class="our-work-projects">
                    { for PROJECTS.iter().enumerate().map(|(i, (title, description))| html! {
                        <WorkItem key={i} index={i} title={*title} description={*description} project=true />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .our-work {
                    background: #ffffff;
                    padding: 6rem 2rem;
                }
                .our-work-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .our-work-heading {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #003366;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .our-work-heading.projects { margin-top: 5rem; }
                .our-work-heading .accent { color: #FF6600; }
                .our-work-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                }
                .work-item, .project-card {
                    border-radius: 0.75rem;
                    padding: 2rem;
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }
                .work-item {
                    background: #f9fafb;
                    border-left: 4px solid #003366;
                }
                .work-item.unrevealed, .project-card.unrevealed {
                    opacity: 0;
                    transform: translateY(3rem) scale(0.95);
                }
                .work-item.revealed, .project-card.revealed {
                    opacity: 1;
                    transform: translateY(0) scale(1);
                }
                .work-item h3, .project-card h3 {
                    font-size: 1.15rem;
                    font-weight: 600;
                    color: #003366;
                    margin-bottom: 0.75rem;
                }
                .work-item p, .project-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                .our-work-projects {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 2rem;
                }
                .project-card:nth-child(odd) { background: #eff6ff; }
                .project-card:nth-child(even) { background: #fff7ed; }
                "#}
            </style>
        </section>
    }
}
