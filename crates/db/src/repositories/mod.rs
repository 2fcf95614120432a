pub mod gallery_item_repo;
pub mod project_repo;
