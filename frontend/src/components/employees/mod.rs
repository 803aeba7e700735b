pub mod browser;
pub mod editor;
