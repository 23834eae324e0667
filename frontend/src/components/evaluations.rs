use super::super::Model;
use super::super::Msg;
use super::utils::format_timestamp;
use shared::{EvaluationRow, NOT_AVAILABLE};
use yew::prelude::*;

pub fn render_evaluations(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section class="evaluations-section">
            <h2>{"Previous Evaluations"}</h2>
            <button
                id="loadEvaluationsBtn"
                class="action-btn"
                onclick={ctx.link().callback(|_| Msg::LoadEvaluations)}
            >
                {"Load Evaluations"}
            </button>
            <table id="evaluationsTable">
                <thead>
                    <tr>
                        <th>{"ID"}</th>
                        <th>{"Uploaded Image"}</th>
                        <th>{"Human Face"}</th>
                        <th>{"Blurry"}</th>
                        <th>{"Corrected Image"}</th>
                        <th>{"Created On"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for model.evaluations.iter().map(render_row) }
                </tbody>
            </table>
        </section>
    }
}

fn render_row(row: &EvaluationRow) -> Html {
    html! {
        <tr>
            <td>{ row.id_text() }</td>
            <td><img src={row.uploaded_image.clone()} width="100" alt="Uploaded Image" /></td>
            <td>{ row.is_human_face.to_string() }</td>
            <td>{ row.is_blurry.to_string() }</td>
            <td>
                {
                    match &row.corrected_image {
                        Some(url) => html! {
                            <img src={url.clone()} width="100" alt="Corrected Image" />
                        },
                        None => html! { <>{ NOT_AVAILABLE }</> },
                    }
                }
            </td>
            <td>{ format_timestamp(row.created_on.as_deref()) }</td>
        </tr>
    }
}
