pub mod analysis;
pub mod status;
