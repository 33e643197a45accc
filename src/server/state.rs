use std::sync::Arc;

use crate::features::mentees::MenteeService;

#[derive(Clone)]
pub struct AppState {
    pub mentees: Arc<MenteeService>,
    pub index_path: Arc<String>,
}

impl AppState {
    pub fn new(mentees: Arc<MenteeService>, index_path: String) -> Self {
        Self {
            mentees,
            index_path: Arc::new(index_path),
        }
    }
}
