pub mod formatted;
