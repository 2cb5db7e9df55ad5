//! 应用模块：按资源划分的接口实现

pub mod pages;
pub mod stats;
pub mod users;
