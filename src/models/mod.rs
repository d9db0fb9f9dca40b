pub mod day;
pub mod event;
pub mod record;

pub use day::*;
pub use event::*;
pub use record::*;
