pub mod api_info;
pub mod calculation;
pub mod error;
pub mod health;

pub use api_info::*;
pub use calculation::*;
pub use error::*;
pub use health::*;
