use super::super::Model;
use super::super::Msg;
use super::utils::alert;
use crate::api::{self, ApiError};
use shared::{
    AnalysisOutcome, Endpoint, Evaluation, EvaluationRow, UploadResponse, require_file,
    require_image_path,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_upload(model: &mut Model, ctx: &Context<Model>) -> bool {
    let file = match require_file(model.selected_file.clone()) {
        Ok(file) => file,
        Err(e) => {
            alert(&e.to_string());
            return false;
        }
    };

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::upload_image(&file).await {
            Ok(response) => link.send_message(Msg::Uploaded(response)),
            Err(e) => link.send_message(Msg::RequestFailed(Endpoint::UploadImage, e)),
        }
    });

    false
}

/// The returned path is shown and also prefilled for analysis.
pub fn handle_uploaded(model: &mut Model, response: UploadResponse) -> bool {
    log::info!("Image stored at {}", response.img_path);
    model.upload_result = Some(response.summary());
    model.image_path = response.img_path;
    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let image_path = match require_image_path(&model.image_path) {
        Ok(path) => path.to_string(),
        Err(e) => {
            alert(&e.to_string());
            return false;
        }
    };

    let link = ctx.link().clone();
    spawn_local(async move {
        match api::analyze_image(&image_path).await {
            Ok(outcome) => link.send_message(Msg::Analyzed(outcome)),
            Err(e) => {
                link.send_message(Msg::RequestFailed(Endpoint::FaceDetectionAndBlurAnalysis, e))
            }
        }
    });

    false
}

pub fn handle_analyzed(model: &mut Model, outcome: AnalysisOutcome) -> bool {
    model.analysis = Some(outcome);
    true
}

pub fn handle_load_evaluations(ctx: &Context<Model>) -> bool {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_evaluations().await {
            Ok(evaluations) => link.send_message(Msg::EvaluationsLoaded(evaluations)),
            Err(e) => link.send_message(Msg::RequestFailed(
                Endpoint::GetAllDetectionsAndCorrections,
                e,
            )),
        }
    });

    false
}

pub fn handle_evaluations_loaded(model: &mut Model, evaluations: Vec<Evaluation>) -> bool {
    model.evaluations = evaluations.into_iter().map(EvaluationRow::from).collect();
    true
}

/// Every failure ends the interaction; previously rendered results stay.
pub fn handle_request_failed(endpoint: Endpoint, error: ApiError) -> bool {
    log::error!("{} {}: {}", endpoint.path(), endpoint.failure_message(), error);
    alert(endpoint.failure_message());
    false
}
