pub mod catalog;
pub mod reading;
