//! Configuration parsing for `devtasks.yml`

pub mod tasks;
pub mod workspace;
