use std::sync::Arc;

use crate::domain::a001_employee::EmployeeRepository;

/// State shared by all request handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub employees: Arc<EmployeeRepository>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
