mod header_cfg;
mod header_cfg_builder;

pub use header_cfg::*;
pub use header_cfg_builder::*;
