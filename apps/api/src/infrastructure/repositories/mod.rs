pub mod in_memory_picture_repository;
