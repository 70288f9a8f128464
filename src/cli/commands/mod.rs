pub mod check;
pub mod clean;
mod command_result;
pub mod helper;
pub mod init;
pub mod lookup;

pub use command_result::*;
