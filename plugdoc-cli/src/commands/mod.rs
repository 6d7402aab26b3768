pub mod generate;
pub mod init_template;
