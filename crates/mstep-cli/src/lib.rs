//! Library side of the `mstep` command line tool.

pub mod check;
pub mod logging;
