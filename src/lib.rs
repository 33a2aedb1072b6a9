pub mod cli;
pub mod conf;
pub mod container;
pub mod core;
pub mod locate;
pub mod render;
pub mod summary;

#[cfg(feature = "testutil")]
pub mod testutil;
