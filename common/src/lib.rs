//! AgriCare Common Library
//!
//! CLIとWeb(WASM)で共有される型と状態機械

pub mod types;
pub mod error;
pub mod capture;
pub mod camera;
pub mod config;
pub mod dashboard;
pub mod fallback;
pub mod treatment;
pub mod workflow;

pub use types::{Outcome, ReadingField, ResponseBody, SoilAnalysis, SoilReadings};
pub use error::{Error, Result};
pub use capture::{CaptureSource, CaptureState, ImageArtifact};
pub use camera::{CameraSession, CameraState, CameraStream};
pub use config::EndpointConfig;
pub use dashboard::{DashboardView, HealthBand};
pub use fallback::demo_analysis;
pub use treatment::Treatment;
pub use workflow::{FailurePresentation, InputMode, PendingSubmission, SubmitRequest, Ticket, Workflow};
