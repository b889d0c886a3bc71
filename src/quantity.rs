#[macro_use]
pub mod macros;

pub mod energy;
pub mod length;
pub mod mass;
pub mod speed;
pub mod time;
