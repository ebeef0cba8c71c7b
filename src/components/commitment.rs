use yew::prelude::*;
use yew_router::prelude::*;

use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};
use crate::Route;

/// Closing commitment banner with the final call to action.
#[function_component(Commitment)]
pub fn commitment() -> Html {
    let content_ref = use_node_ref();
    let reveal = use_scroll_reveal(content_ref.clone(), RepeatPolicy::Once, 100.0);

    html! {
        <section class="commitment">
            <div ref={content_ref} class={classes!("commitment-content", reveal.class())}>
                <h2>
                    {"Our Commitment"}
                    <span class="commitment-underline" />
                </h2>
                <p>
                    {"At Hexylon Analytics, we are more than just an AI provider. We're a \
                      partner in your success, ensuring that every solution we deliver adds \
                      value to your business. Let's work together to unlock the potential \
                      of AI for your company."}
                </p>
                <Link<Route> to={Route::ContactUs} classes="commitment-cta">
                    {"Get in Touch Today →"}
                </Link<Route>>
                <div class="commitment-sub">{"Take the first step towards a smarter future"}</div>
            </div>
            <style>
                {r#"
                .commitment {
                    background: linear-gradient(135deg, #003366, #002244);
                    color: #ffffff;
                    padding: 6rem 2rem;
                    text-align: center;
                }
                .commitment-content {
                    max-width: 48rem;
                    margin: 0 auto;
                    transition: opacity 1s ease, transform 1s ease;
                }
                .commitment-content.unrevealed { opacity: 0; transform: translateY(2rem); }
                .commitment-content.revealed { opacity: 1; transform: translateY(0); }
                .commitment h2 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .commitment-underline {
                    display: block;
                    height: 4px;
                    width: 5rem;
                    background: #FF6600;
                    margin: 1rem auto 0;
                }
                .commitment p {
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #d1d5db;
                    margin-bottom: 3rem;
                }
                .commitment-cta {
                    display: inline-block;
                    background: #FF6600;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 1rem 2rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .commitment-cta:hover {
                    background: #FF7F00;
                    transform: scale(1.05);
                }
                .commitment-sub {
                    margin-top: 1rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                "#}
            </style>
        </section>
    }
}
