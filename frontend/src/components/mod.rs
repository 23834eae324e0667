pub mod analysis_section;
pub mod evaluations;
pub mod handlers;
pub mod header;
pub mod upload_section;
pub mod utils;
