pub mod convert_ops;
pub mod table_ops;
