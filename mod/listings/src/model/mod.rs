mod booking;
mod compound;
mod developer;
mod property;

pub use booking::*;
pub use compound::*;
pub use developer::*;
pub use property::*;
