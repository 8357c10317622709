pub mod footer;
pub mod nav;
