mod exposure_details;
mod exposure_instructions;
mod home;

pub use exposure_details::ExposureDetails;
pub use exposure_instructions::ExposureInstructions;
pub use home::Home;
