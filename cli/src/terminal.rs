pub mod colors;
pub mod logging;
pub mod pause;
pub mod print;
pub mod progress;
