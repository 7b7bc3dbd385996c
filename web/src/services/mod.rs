pub mod audio_dependencies;
pub mod audio_settings;
pub mod i18n;
pub mod log_buffer;
pub mod views;
