pub mod review;
pub mod timestamp;
