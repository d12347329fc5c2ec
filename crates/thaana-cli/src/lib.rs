pub mod codepoints;
pub mod commands;
pub mod trace_init;
