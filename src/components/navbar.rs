use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Fixed top navigation. Gains a solid background once the page is scrolled
/// past the hero fold.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::wrap(Box::new(move || {
                    let scrolled = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map(|el| el.scroll_top() > 80)
                        .unwrap_or(false);
                    is_scrolled.set(scrolled);
                }) as Box<dyn FnMut()>);
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Hexylon"}<span class="nav-logo-accent">{"Analytics"}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Home"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::ContactUs} classes="nav-contact-button">
                            {"Contact Us"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 12px rgba(0, 51, 102, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #003366;
                    text-decoration: none;
                }
                .nav-logo-accent {
                    color: #FF6600;
                    margin-left: 0.25rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #003366;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #FF6600;
                }
                .nav-contact-button {
                    background: #003366;
                    color: #ffffff;
                    padding: 0.6rem 1.4rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.3s ease;
                }
                .nav-contact-button:hover {
                    background: #FF6600;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 3px;
                    background: #003366;
                    border-radius: 2px;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        background: #ffffff;
                        padding: 1.5rem 0;
                        box-shadow: 0 8px 16px rgba(0, 51, 102, 0.1);
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
        </nav>
    }
}
