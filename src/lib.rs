pub mod constants;
pub mod error;
pub mod plots;
pub mod recording;
pub mod util;
