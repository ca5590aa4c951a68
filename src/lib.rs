#![deny(unused_variables)]
#![deny(dead_code)]
#![deny(unused_imports)]
pub mod buffer;
pub mod digest;
pub mod pipeline;
pub mod report;
pub mod roster;
pub mod store;
pub mod types;
