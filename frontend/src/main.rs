mod api;
mod components;

use api::ApiError;
use components::analysis_section::render_analysis_section;
use components::evaluations::render_evaluations;
use components::handlers;
use components::header::render_header;
use components::upload_section::render_upload_section;
use gloo_file::File as GlooFile;
use shared::{AnalysisOutcome, Endpoint, Evaluation, EvaluationRow, UploadResponse};
use yew::prelude::*;

// Yew msg components
enum Msg {
    // Upload
    FileSelected(Option<GlooFile>),
    Upload,
    Uploaded(UploadResponse),

    // Analysis
    ImagePathChanged(String),
    Analyze,
    Analyzed(AnalysisOutcome),

    // Evaluation history
    LoadEvaluations,
    EvaluationsLoaded(Vec<Evaluation>),

    RequestFailed(Endpoint, ApiError),
}

// Main component
struct Model {
    selected_file: Option<GlooFile>,
    upload_result: Option<String>,
    image_path: String,
    analysis: Option<AnalysisOutcome>,
    evaluations: Vec<EvaluationRow>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected_file: None,
            upload_result: None,
            image_path: String::new(),
            analysis: None,
            evaluations: Vec::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileSelected(file) => {
                self.selected_file = file;
                false
            }
            Msg::Upload => handlers::handle_upload(self, ctx),
            Msg::Uploaded(response) => handlers::handle_uploaded(self, response),

            Msg::ImagePathChanged(path) => {
                self.image_path = path;
                true
            }
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::Analyzed(outcome) => handlers::handle_analyzed(self, outcome),

            Msg::LoadEvaluations => handlers::handle_load_evaluations(ctx),
            Msg::EvaluationsLoaded(evaluations) => {
                handlers::handle_evaluations_loaded(self, evaluations)
            }

            Msg::RequestFailed(endpoint, error) => handlers::handle_request_failed(endpoint, error),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                { render_upload_section(self, ctx) }
                { render_analysis_section(self, ctx) }
                { render_evaluations(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Face Detection & Blur Analysis | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Dashboard starting...");
    yew::Renderer::<Model>::new().render();
}
