pub mod driver;

pub use driver::{CarouselHandle, DriverError};
