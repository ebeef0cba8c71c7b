use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-logo">{"Hexylon Analytics"}</span>
                    <p>{"Tailored AI solutions that amplify the way you already work."}</p>
                </div>
                <div class="footer-links">
                    <h4>{"Quick Links"}</h4>
                    <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                    <Link<Route> to={Route::ContactUs}>{"Contact Us"}</Link<Route>>
                </div>
                <div class="footer-links">
                    <h4>{"Connect"}</h4>
                    <a href="mailto:Support@hexylon.in">{"Support@hexylon.in"}</a>
                    <a href="tel:+917990821728">{"+91 7990821728"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Hexylon Analytics. All rights reserved."}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #002244;
                    color: #d1d5db;
                    padding: 4rem 2rem 1.5rem;
                }
                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #ffffff;
                }
                .footer-brand p {
                    margin-top: 0.75rem;
                    font-size: 0.95rem;
                    color: #9ca3af;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links h4 {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: #ffffff;
                    margin-bottom: 0.5rem;
                }
                .footer-links a {
                    color: #d1d5db;
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .footer-links a:hover { color: #FF6600; }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    text-align: center;
                    font-size: 0.85rem;
                    color: #9ca3af;
                }
                @media (max-width: 768px) {
                    .footer-inner { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </footer>
    }
}
