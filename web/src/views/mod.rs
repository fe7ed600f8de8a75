pub mod legend;
pub mod map;
