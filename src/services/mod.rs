pub mod application_service;
pub mod candidate_service;
pub mod identity_service;
pub mod interview_service;
pub mod job_service;
pub mod role_service;
pub mod scorecard_service;
pub mod staff_service;
