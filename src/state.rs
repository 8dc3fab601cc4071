use std::sync::Arc;

use crate::services::email::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<Mailer>,
}
