use yew::prelude::*;

use crate::effects::scroll_reveal::use_scroll_scrub;
use crate::effects::typewriter::{Typewriter, TypewriterConfig};

struct Step {
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Understand Your Business",
        description: "We start by sending our expert consultants to your company. They \
                      immerse themselves in your processes, challenges, and work culture \
                      to get a firsthand understanding of what makes your company tick.",
    },
    Step {
        title: "Identify Opportunities",
        description: "Based on our detailed analysis, we uncover areas where AI can make \
                      a tangible difference. Whether it's improving efficiency, reducing \
                      costs, or enhancing customer experiences, we pinpoint the best AI \
                      opportunities.",
    },
    Step {
        title: "Tailored AI Solutions",
        description: "Our team of AI experts then develops a customized solution that \
                      aligns perfectly with your goals and workflow. From automation to \
                      advanced data analytics, every aspect is designed to fit seamlessly \
                      into your current system.",
    },
    Step {
        title: "Proven Outcomes and Scaling Support",
        description: "After implementation, we provide ongoing support and help scale the \
                      solution as your business grows. With proven results and actionable \
                      insights, we ensure long-term value from your AI investment.",
    },
];

/// Process section. The heading types itself once; after that the step cards
/// ride a pinned rail scrubbed by scroll progress through the section.
#[function_component(HowWeWork)]
pub fn how_we_work() -> Html {
    let section_ref = use_node_ref();
    let typing_complete = use_state(|| false);
    let progress = use_scroll_scrub(section_ref.clone());

    // Memoized so scrub-driven re-renders hand the typewriter the same
    // callback instead of a fresh one each time.
    let on_typed = {
        let typing_complete = typing_complete.clone();
        use_callback(move |_, _| typing_complete.set(true), ())
    };

    // The rail stays parked until the heading has finished typing.
    let shift = if *typing_complete { progress * 55.0 } else { 0.0 };
    let rail_style = format!("transform: translateX(-{shift:.2}%);");
    let line_style = format!("width: {:.1}%;", progress * 100.0);

    let heading = TypewriterConfig::once("How We Work?");

    html! {
        <section ref={section_ref} class="how-we-work">
            <div class="hww-pin">
                <div class="hww-progress-track">
                    <div class="hww-progress-line" style={line_style} />
                </div>
                <h2 class="hww-heading">
                    <Typewriter config={heading} on_complete={Some(on_typed)} />
                </h2>
                <div class="hww-rail-window">
                    <div class="hww-rail" style={rail_style}>
                        { for STEPS.iter().enumerate().map(|(i, step)| html! {
                            <div class="hww-card" key={i}>
                                <span class="hww-step-number">{ format!("Step {}", i + 1) }</span>
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .how-we-work {
                    position: relative;
                    height: 300vh;
                    background: #f9fafb;
                }
                .hww-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    overflow: hidden;
                    padding: 0 2rem;
                }
                .hww-progress-track {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: rgba(0, 51, 102, 0.1);
                }
                .hww-progress-line {
                    height: 100%;
                    background: linear-gradient(to right, #003366, #FF6600);
                    transition: width 0.1s linear;
                }
                .hww-heading {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #003366;
                    border-left: 4px solid #FF6600;
                    padding-left: 1.25rem;
                    margin-bottom: 3rem;
                    min-height: 3.5rem;
                }
                .hww-rail-window {
                    overflow: hidden;
                }
                .hww-rail {
                    display: flex;
                    gap: 1.5rem;
                    will-change: transform;
                }
                .hww-card {
                    flex-shrink: 0;
                    width: 400px;
                    background: #ffffff;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                    padding: 2rem;
                }
                .hww-step-number {
                    font-size: 1.75rem;
                    font-weight: 700;
                    color: #FF6600;
                }
                .hww-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #003366;
                    margin: 0.75rem 0;
                }
                .hww-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                @media (max-width: 768px) {
                    .hww-card { width: 300px; }
                    .hww-heading { font-size: 1.75rem; }
                }
                "#}
            </style>
        </section>
    }
}
