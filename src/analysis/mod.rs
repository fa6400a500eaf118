///! Single-NEO assessment module
///!
///! Fetches one near-Earth object by its NASA reference ID and renders a
///! multi-section plain-text assessment report: physical characteristics,
///! hazard and orbit data, close-approach history, and a hypothetical
///! impact analysis.

pub mod parser;
pub mod physics;
pub mod report;
pub mod types;

pub use parser::parse_neo_json;
pub use report::render_report;
pub use types::NeoDetail;
