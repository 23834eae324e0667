use gloo_file::File as GlooFile;
use js_sys::Date;
use wasm_bindgen::JsValue;
use web_sys::FileList;

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert could not be shown: {:?}", e);
        }
    }
}

/// Only the first picked file is used.
pub fn first_file(file_list: Option<FileList>) -> Option<GlooFile> {
    file_list.and_then(|files| files.item(0)).map(GlooFile::from)
}

/// Renders an upstream timestamp in the browser's locale. Unparseable input
/// comes back as the browser's "Invalid Date".
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => Date::new(&JsValue::from_str(raw))
            .to_locale_string("default", &JsValue::UNDEFINED)
            .into(),
        None => String::new(),
    }
}
