pub mod admin;
pub mod chat;
pub mod content;
pub mod i18n;
pub mod leads;
