pub mod certificate;
pub mod job_role;
