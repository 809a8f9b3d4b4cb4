pub mod build_info;
pub mod persistence;
