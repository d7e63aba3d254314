pub mod advanced;
pub mod feed;
pub mod round;
pub mod summary;
