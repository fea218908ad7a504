mod command_result;
pub mod dead_code;
pub mod helper;
pub mod init;
pub mod inventory;

pub use command_result::*;
