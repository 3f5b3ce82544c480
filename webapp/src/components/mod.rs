pub mod icon;
pub mod navigation;
mod section_header;

pub use section_header::SectionHeader;
