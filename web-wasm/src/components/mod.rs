pub mod camera_panel;
pub mod error_banner;
pub mod header;
pub mod loading;
pub mod raw_result;
pub mod readings_form;
pub mod soil_dashboard;
pub mod upload_area;
