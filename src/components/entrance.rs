use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// The entrance overlays are alternates, never composed; pages mount at most
/// one of them, or none.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EntranceVariant {
    /// A dot sweeps across the screen leaving a two-tone trail.
    SweepTrail,
    /// The brand name scales in, holds, then fades.
    LogoReveal,
}

#[derive(Properties, PartialEq)]
pub struct EntranceOverlayProps {
    pub variant: EntranceVariant,
    #[prop_or_default]
    pub on_finished: Option<Callback<()>>,
}

/// Full-screen entrance animation that plays once on mount, then removes
/// itself. Stages advance on a timer; the pending timeout is cancelled if the
/// overlay unmounts mid-animation.
#[function_component(EntranceOverlay)]
pub fn entrance_overlay(props: &EntranceOverlayProps) -> Html {
    let stage = use_state(|| 0u32);

    {
        let stage_handle = stage.clone();
        let on_finished = props.on_finished.clone();
        use_effect_with_deps(
            move |current: &u32| {
                let current = *current;
                let mut pending = None;
                if current < 3 {
                    let delay = match current {
                        0 => 200,  // let the page paint before the sweep starts
                        1 => 1200, // sweep/scale-in runs
                        _ => 600,  // hold, then fade
                    };
                    let next = current + 1;
                    pending = Some(Timeout::new(delay, move || {
                        stage_handle.set(next);
                        if next == 3 {
                            if let Some(cb) = &on_finished {
                                cb.emit(());
                            }
                        }
                    }));
                }
                move || drop(pending)
            },
            *stage,
        );
    }

    if *stage >= 3 {
        return Html::default();
    }

    let variant_class = match props.variant {
        EntranceVariant::SweepTrail => "entrance-sweep",
        EntranceVariant::LogoReveal => "entrance-logo",
    };
    let stage_class = format!("stage-{}", *stage);

    html! {
        <div class={classes!("entrance-overlay", variant_class, stage_class)}>
            {
                match props.variant {
                    EntranceVariant::SweepTrail => html! {
                        <>
                            <div class="entrance-trail navy" />
                            <div class="entrance-trail saffron" />
                            <div class="entrance-dot" />
                        </>
                    },
                    EntranceVariant::LogoReveal => html! {
                        <div class="entrance-brand">
                            {"Hexylon"}<span>{"Analytics"}</span>
                        </div>
                    },
                }
            }
            <style>
                {r#"
                .entrance-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    transition: opacity 0.6s ease;
                }
                .entrance-overlay.stage-2 { opacity: 0; }
                .entrance-dot {
                    width: 28px;
                    height: 28px;
                    border-radius: 50%;
                    background: #FF6600;
                    position: absolute;
                    left: -28px;
                    top: 50%;
                    transition: left 1.2s ease-in-out;
                }
                .entrance-sweep.stage-1 .entrance-dot,
                .entrance-sweep.stage-2 .entrance-dot { left: 100%; }
                .entrance-trail {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    height: 3px;
                    width: 0;
                    transition: width 1.2s ease-in-out;
                }
                .entrance-trail.navy { background: #003366; margin-top: 14px; }
                .entrance-trail.saffron { background: #FF6600; margin-top: 17px; }
                .entrance-sweep.stage-1 .entrance-trail,
                .entrance-sweep.stage-2 .entrance-trail { width: 100%; }
                .entrance-brand {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #003366;
                    transform: scale(0.6);
                    opacity: 0;
                    transition: transform 1.2s ease, opacity 1.2s ease;
                }
                .entrance-brand span { color: #FF6600; margin-left: 0.5rem; }
                .entrance-logo.stage-1 .entrance-brand,
                .entrance-logo.stage-2 .entrance-brand {
                    transform: scale(1);
                    opacity: 1;
                }
                "#}
            </style>
        </div>
    }
}
