use yew::prelude::*;

use super::app::FrameContext;

#[function_component(Header)]
pub fn header() -> Html {
    let progress = use_context::<FrameContext>()
        .map_or(0.0, |c| c.sample.page_progress.value());
    html! {
        <header class="ox-header">
            <a href="#" class="ox-logo" data-hover="true">{"OX"}</a>
            <span class="ox-header-status">{"[ SIGNAL: NONE ]"}</span>
            <div class="ox-progress" style={format!("transform: scaleX({progress:.4});")}></div>
        </header>
    }
}
