pub mod decode;
pub mod init;
pub mod start;
