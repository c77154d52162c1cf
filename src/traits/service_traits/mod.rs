pub mod notification_service;
pub mod report_service;
pub mod scheduler_service;
