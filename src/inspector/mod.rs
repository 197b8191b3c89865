pub mod inspector;
pub mod offering_check;
