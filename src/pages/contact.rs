use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::entrance::{EntranceOverlay, EntranceVariant};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::effects::particles::{ParticleCanvas, ParticleShape};
use crate::effects::scroll_reveal::{use_scroll_reveal, RepeatPolicy};

const CONTACT_ITEMS: [(&str, &str); 4] = [
    (
        "Visit Us",
        "B/410, Ganesh Plaza, Nr. Navrangpura Post Office, Navrangpura, Ahmedabad, \
         Gujarat, India - 380 009",
    ),
    ("Call Us", "+91 7990821728"),
    ("Email Us", "Support@hexylon.in"),
    ("Business Hours", "Mon - Fri: 9:00 AM - 7:00 PM IST"),
];

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3671.684982717429!2d72.55826618629733!3d23.035335962144465!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x395e84f461610533%3A0xa56a93bc9468d0!2sGanesh%20Plaza%2C%20Navrangpura%20Rd%2C%20Near%20Navrangpura%20Post%20Office%2C%20Shrimali%20Society%2C%20Navrangpura%2C%20Ahmedabad%2C%20Gujarat%20380009!5e0!3m2!1sen!2sin!4v1730131237754!5m2!1sen!2sin";

#[derive(Properties, PartialEq)]
struct ContactItemProps {
    title: &'static str,
    content: &'static str,
    index: usize,
}

#[function_component(ContactItem)]
fn contact_item(props: &ContactItemProps) -> Html {
    let item_ref = use_node_ref();
    let reveal = use_scroll_reveal(item_ref.clone(), RepeatPolicy::Once, 60.0);
    let delay_style = format!("transition-delay: {}ms;", props.index * 200);

    html! {
        <div ref={item_ref} class={classes!("contact-item", reveal.class())} style={delay_style}>
            <h3>{ props.title }</h3>
            <p>{ props.content }</p>
        </div>
    }
}

#[function_component(ContactUs)]
pub fn contact_us() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let hero_ref = use_node_ref();
    let hero_reveal = use_scroll_reveal(hero_ref.clone(), RepeatPolicy::Once, 0.0);

    html! {
        <>
            <EntranceOverlay variant={EntranceVariant::LogoReveal} />
            <Navbar />
            <div class="contact-page">
                <ParticleCanvas count={40} connect_distance={90.0} shape={ParticleShape::Dot} />
                <div class="contact-main">
                    <div ref={hero_ref} class={classes!("contact-hero", hero_reveal.class())}>
                        <h1>
                            {"Let's Connect "}
                            <span class="accent">{"& Innovate"}</span>
                        </h1>
                        <p>
                            {"Transform your business with our cutting-edge AI solutions. \
                              Fill out the form below to start your journey."}
                        </p>
                    </div>

                    <ContactForm />

                    <div class="contact-grid">
                        <div class="contact-info">
                            <h2>{"Get in Touch"}</h2>
                            { for CONTACT_ITEMS.iter().enumerate().map(|(i, (title, content))| html! {
                                <ContactItem key={i} index={i} title={*title} content={*content} />
                            }) }
                        </div>
                        <div class="contact-map">
                            <iframe
                                src={MAP_EMBED_URL}
                                title="Hexylon Analytics office location"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            />
                        </div>
                    </div>
                </div>
            </div>
            <Footer />
            <style>
                {r#"
                .contact-page {
                    position: relative;
                    min-height: 100vh;
                    background: #ffffff;
                    overflow: hidden;
                }
                .contact-main {
                    position: relative;
                    z-index: 10;
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 8rem 1rem 3rem;
                }
                .contact-hero {
                    text-align: center;
                    margin-bottom: 4rem;
                    transition: opacity 1s ease, transform 1s ease;
                }
                .contact-hero.unrevealed { opacity: 0; transform: translateY(3rem); }
                .contact-hero.revealed { opacity: 1; transform: translateY(0); }
                .contact-hero h1 {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #003366;
                    margin-bottom: 1.5rem;
                }
                .contact-hero .accent { color: #FF6600; }
                .contact-hero p {
                    font-size: 1.125rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .contact-info h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #003366;
                    margin-bottom: 1.5rem;
                }
                .contact-item {
                    background: #ffffff;
                    border-radius: 0.5rem;
                    padding: 1rem 1.5rem;
                    margin-bottom: 0.75rem;
                    box-shadow: 0 4px 10px rgba(0, 51, 102, 0.06);
                    transition: opacity 0.8s ease, transform 0.8s ease, box-shadow 0.3s ease;
                }
                .contact-item.unrevealed { opacity: 0; transform: translateX(-3rem); }
                .contact-item.revealed { opacity: 1; transform: translateX(0); }
                .contact-item:hover {
                    box-shadow: 0 8px 16px rgba(0, 51, 102, 0.12);
                }
                .contact-item h3 {
                    font-weight: 600;
                    color: #003366;
                }
                .contact-item p { color: #4b5563; }
                .contact-map {
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 25px rgba(0, 51, 102, 0.1);
                    min-height: 24rem;
                }
                .contact-map iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .contact-hero h1 { font-size: 2rem; }
                }
                "#}
            </style>
        </>
    }
}
