use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="ox-footer">
            <div class="ox-footer-inner">
                <div class="ox-footer-brand">
                    <h3>{"Offline Xperience"}</h3>
                    <p>{"© 2025 ALL RIGHTS RESERVED. // NO SIGNAL DETECTED."}</p>
                </div>
                <nav class="ox-footer-links">
                    <a href="#" data-hover="true">{"Instagram"}</a>
                    <a href="#" data-hover="true">{"Twitter"}</a>
                    <a href="#" data-hover="true">{"Manifesto"}</a>
                </nav>
            </div>
        </footer>
    }
}
