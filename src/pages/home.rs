use yew::prelude::*;

use crate::components::commitment::Commitment;
use crate::components::entrance::{EntranceOverlay, EntranceVariant};
use crate::components::footer::Footer;
use crate::components::hero::HeroSection;
use crate::components::how_we_work::HowWeWork;
use crate::components::industries::IndustriesSection;
use crate::components::navbar::Navbar;
use crate::components::our_work::OurWork;
use crate::components::why_us::WhyUs;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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

    html! {
        <>
            <EntranceOverlay variant={EntranceVariant::SweepTrail} />
            <Navbar />
            <HeroSection />
            <HowWeWork />
            <WhyUs />
            <IndustriesSection />
            <OurWork />
            <Commitment />
            <Footer />
        </>
    }
}
