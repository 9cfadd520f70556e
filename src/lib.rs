pub mod catalog;
pub mod projection;
pub mod readers;
pub mod render;
pub mod report;
pub mod site;
