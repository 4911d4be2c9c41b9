//! Utility modules

pub mod i18n;
