pub mod calculate;
pub mod health;
pub mod root;

pub use calculate::*;
pub use health::*;
pub use root::*;

pub const SERVICE_NAME: &str = "calculator-backend";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
