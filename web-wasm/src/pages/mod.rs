pub mod landing;
pub mod workflow;
