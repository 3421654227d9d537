pub mod path;
pub mod threshold;
