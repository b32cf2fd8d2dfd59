pub mod fallback;
pub mod index;
pub mod scripts;
