pub mod departments;
pub mod patients;
