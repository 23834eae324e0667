use super::super::Model;
use super::super::Msg;
use shared::AnalysisOutcome;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_analysis_section(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::ImagePathChanged(input.value())
    });

    html! {
        <section class="analysis-section">
            <h2>{"Face Detection & Blur Analysis"}</h2>
            <input
                type="text"
                id="imagePathInput"
                placeholder="/media/uploads/example.jpg"
                value={model.image_path.clone()}
                oninput={handle_input}
            />
            <button id="analyzeBtn" class="action-btn" onclick={link.callback(|_| Msg::Analyze)}>
                {"Analyze"}
            </button>
            <div id="analysisResult">
                { model.analysis.as_ref().map(render_outcome).unwrap_or_else(|| html! {}) }
            </div>
        </section>
    }
}

fn render_outcome(outcome: &AnalysisOutcome) -> Html {
    html! {
        <>
            <p style="color: green; font-weight: bold;">{ &outcome.message }</p>
            {
                if let Some(image) = &outcome.image {
                    html! {
                        <p>
                            <strong>{ image.kind.label() }</strong>
                            <br />
                            <img src={image.url.clone()} width="300" />
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}
