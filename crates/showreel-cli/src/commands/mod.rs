pub mod init_config;
pub mod inspect;
pub mod list;
pub mod run;
