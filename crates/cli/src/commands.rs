pub mod random;
pub mod show;
pub mod today;
