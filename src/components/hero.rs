use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::effects::particles::{ParticleCanvas, ParticleShape};
use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};
use crate::effects::typewriter::{Typewriter, TypewriterConfig};
use crate::Route;

/// Full-screen hero: hexagon-mesh particle background, typewriter headline
/// and the contact call to action.
#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let content_ref = use_node_ref();
    // Above the fold, so the mount-time evaluation reveals it immediately.
    let reveal = use_scroll_reveal(content_ref.clone(), RepeatPolicy::Once, 0.0);

    let typewriter = TypewriterConfig::looping(config::hero_words());

    html! {
        <div class="hero-section">
            <ParticleCanvas count={50} connect_distance={100.0} shape={ParticleShape::Hexagon} />
            <div ref={content_ref} class={classes!("hero-content", reveal.class())}>
                <h1 class="hero-title">{"Unlock the Future with"}</h1>
                <p class="hero-typed">
                    <Typewriter config={typewriter} />
                </p>
                <p class="hero-lead">
                    {"At "}<span class="accent">{"Hexylon Analytics"}</span>
                    {", we believe every business is unique, and so should be the \
                      technology that drives it. We specialize in creating AI solutions \
                      tailored specifically to your company's "}
                    <span class="accent">{"processes"}</span>
                    {" and "}
                    <span class="accent">{"workflow"}</span>
                    {". Our approach is simple yet effective: we understand your way of \
                      working, and we design our AI to amplify it."}
                </p>
                <Link<Route> to={Route::ContactUs} classes="hero-cta">
                    {"Contact Us"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .hero-section {
                    position: relative;
                    width: 100%;
                    min-height: 100vh;
                    background: linear-gradient(135deg, #ffffff, #f7f9fb);
                    overflow: hidden;
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    min-height: 100vh;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    transition: opacity 1s ease, transform 1s ease;
                }
                .hero-content.unrevealed {
                    opacity: 0;
                    transform: translateY(2.5rem);
                }
                .hero-content.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }
                .hero-title {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #003366;
                    margin-bottom: 0.5rem;
                }
                .hero-typed {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #FF6600;
                    min-height: 80px;
                    margin-bottom: 2rem;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    color: #374151;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                    background: rgba(255, 255, 255, 0.3);
                    backdrop-filter: blur(4px);
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 25px rgba(0, 51, 102, 0.08);
                }
                .hero-lead .accent {
                    color: #FF6600;
                    font-weight: 600;
                }
                .hero-cta {
                    display: inline-block;
                    background: #003366;
                    color: #ffffff;
                    font-weight: 600;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: background 0.3s ease, transform 0.3s ease;
                }
                .hero-cta:hover {
                    background: #002347;
                    transform: scale(1.05);
                }
                @media (max-width: 768px) {
                    .hero-title, .hero-typed { font-size: 2rem; }
                }
                "#}
            </style>
        </div>
    }
}
