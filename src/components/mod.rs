pub mod app;
pub mod binary_mark;
pub mod cursor;
pub mod footer;
pub mod header;
pub mod hero;
pub mod manifesto;
pub mod reveal;
