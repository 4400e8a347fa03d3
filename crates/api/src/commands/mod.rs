//! Classification commands - the application's callable surface

mod classification;

pub use classification::*;
