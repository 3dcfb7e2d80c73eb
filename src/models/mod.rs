pub mod location;
pub mod review;
