use super::super::Model;
use super::super::Msg;
use super::utils::first_file;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileSelected(first_file(input.files()))
    });

    html! {
        <section class="upload-section">
            <h2>{"Upload Image"}</h2>
            <input
                type="file"
                id="imageInput"
                accept="image/*"
                onchange={handle_change}
            />
            <button id="uploadBtn" class="action-btn" onclick={link.callback(|_| Msg::Upload)}>
                {"Upload"}
            </button>
            <p id="uploadResult">{ model.upload_result.clone().unwrap_or_default() }</p>
        </section>
    }
}
