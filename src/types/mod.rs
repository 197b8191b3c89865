pub mod hospital;
pub mod hospital_detail;
pub mod notification;
pub mod nullable;
