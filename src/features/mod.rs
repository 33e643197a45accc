pub mod mentees;
pub mod status;
pub mod store;
