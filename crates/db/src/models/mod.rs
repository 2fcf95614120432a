pub mod gallery_item;
pub mod project;
