pub mod config;
pub mod constants;
pub mod engine;
pub mod math;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod transform;

pub use config::*;
pub use engine::*;
pub use scheduler::*;
pub use state::*;
pub use surface::*;
pub use transform::*;
