pub use animation::*;
pub use element::*;
pub use error::*;
pub use presentation::*;
pub use scheduler::*;

mod animation;
mod element;
mod error;
mod presentation;
mod scheduler;
pub mod testing;
