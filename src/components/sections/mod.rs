pub mod audio;
pub mod video;
pub mod show_notes;
pub mod transcript;
