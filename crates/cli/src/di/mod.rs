mod jobs;
mod services;
mod use_cases;

pub use jobs::build_job_runner;
pub use services::Services;
pub use use_cases::UseCases;
