pub mod get_picture;
pub mod list_pictures;
pub mod page_navigation;
