use std::rc::Rc;

mod anim;
mod components;
mod config;
mod error;
mod mapper;
mod model;
mod state;
mod util;

use components::app::{App, AppProps};
use config::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::load();
    util::set_verbose(config.verbose_log);
    util::clog("offline xperience: mounting");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
