pub mod base_commands;
pub mod generate_cmd;
pub mod render_cmd;
pub mod report_format;
pub mod session;
pub mod summary_cmd;
