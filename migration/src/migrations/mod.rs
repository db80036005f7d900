pub mod m202507010001_create_assignments;
pub mod m202507010002_create_submitted_assignments;
