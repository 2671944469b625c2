pub mod page_client;
pub mod translate_client;
