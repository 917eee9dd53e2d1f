pub mod help;
pub mod quiz;
pub mod study;
pub mod theme_select;
