use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1>{"Face Detection & Blur Analysis"}</h1>
            <p class="subtitle">{"Upload an image, analyse it, and review past evaluations"}</p>
        </header>
    }
}
