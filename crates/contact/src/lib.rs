mod controller;
mod notifier;
pub mod schema;
mod sink;
mod state;
mod values;

pub use controller::*;
pub use notifier::*;
pub use sink::*;
pub use state::*;
pub use values::*;
