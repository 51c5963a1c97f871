pub mod build_info;
pub mod check;
pub mod cli;
pub mod deltas;
pub mod output;
pub mod util;
