pub mod assignment;
pub mod submitted_assignment;
