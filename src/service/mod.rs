pub mod notification_service_impl;
pub mod report_service_impl;
pub mod scheduler_service_impl;
