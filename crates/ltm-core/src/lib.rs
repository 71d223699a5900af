pub mod config;
pub mod logging;

// Lookup pipeline
pub mod availability;
pub mod resolve;
pub mod url_input;

// Presentation support
pub mod i18n;
pub mod timefmt;
