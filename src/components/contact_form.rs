use serde::Serialize;
use web_sys::{Event, HtmlInputElement, SubmitEvent};
use yew::prelude::*;

/// Local-only draft of the contact form. There is no backend to submit to;
/// submission logs the draft and clears the fields.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct ContactFormDraft {
    pub name: String,
    pub company_name: String,
    pub area_of_interest: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub industry_focus: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let draft = use_state(ContactFormDraft::default);

    let field = |apply: fn(&mut ContactFormDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*draft).clone();
            apply(&mut next, input.value());
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match serde_json::to_string(&*draft) {
                Ok(json) => log::info!("contact form submitted: {}", json),
                Err(err) => log::warn!("could not serialize contact form: {}", err),
            }
            draft.set(ContactFormDraft::default());
        })
    };

    html! {
        <div class="contact-form-container">
            <form class="contact-form" onsubmit={onsubmit}>
                <p class="contact-sentence">
                    {"Hello! My name is "}
                    <input
                        type="text"
                        placeholder="Your Name"
                        value={draft.name.clone()}
                        onchange={field(|d, v| d.name = v)}
                        style="width: 200px;"
                        required=true
                    />
                    {", and I represent "}
                    <input
                        type="text"
                        placeholder="Your Company Name"
                        value={draft.company_name.clone()}
                        onchange={field(|d, v| d.company_name = v)}
                        style="width: 200px;"
                        required=true
                    />
                    {". I'm interested in learning more about how Hexylon Analytics can help us with "}
                    <input
                        type="text"
                        placeholder="Your Area of Interest"
                        value={draft.area_of_interest.clone()}
                        onchange={field(|d, v| d.area_of_interest = v)}
                        style="width: 250px;"
                        required=true
                    />
                    {". You can reach me at "}
                    <input
                        type="email"
                        placeholder="Your Email"
                        value={draft.email.clone()}
                        onchange={field(|d, v| d.email = v)}
                        style="width: 200px;"
                        required=true
                    />
                    {" or call me at "}
                    <input
                        type="tel"
                        placeholder="Your Phone Number"
                        value={draft.phone.clone()}
                        onchange={field(|d, v| d.phone = v)}
                        style="width: 150px;"
                        required=true
                    />
                    {". Our company is currently located in "}
                    <input
                        type="text"
                        placeholder="Your Location"
                        value={draft.location.clone()}
                        onchange={field(|d, v| d.location = v)}
                        style="width: 200px;"
                        required=true
                    />
                    {", and we are specifically focused on "}
                    <input
                        type="text"
                        placeholder="Your Industry/Project Focus"
                        value={draft.industry_focus.clone()}
                        onchange={field(|d, v| d.industry_focus = v)}
                        style="width: 200px;"
                        required=true
                    />
                    {". Looking forward to connecting!"}
                </p>
                <button type="submit" class="contact-submit">{"Send Message"}</button>
            </form>
            <style>
                {r#"
                .contact-form-container {
                    background: #ffffff;
                    border-radius: 1rem;
                    box-shadow: 0 20px 40px rgba(0, 51, 102, 0.1);
                    padding: 2rem;
                    max-width: 56rem;
                    margin: 0 auto 6rem;
                    position: relative;
                }
                .contact-sentence {
                    font-size: 1.125rem;
                    line-height: 2.4;
                    color: #003366;
                }
                .contact-sentence input {
                    display: inline-block;
                    border: none;
                    border-bottom: 2px solid #FF6600;
                    background: transparent;
                    padding: 0.25rem 0.5rem;
                    font-size: 1rem;
                    color: #003366;
                    outline: none;
                }
                .contact-sentence input:focus {
                    border-bottom-color: #003366;
                }
                .contact-submit {
                    width: 100%;
                    margin-top: 2rem;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #FF6600;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }
                .contact-submit:hover {
                    transform: scale(1.02);
                    box-shadow: 0 10px 20px rgba(255, 102, 0, 0.25);
                }
                "#}
            </style>
        </div>
    }
}
