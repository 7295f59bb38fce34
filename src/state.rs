/*
 * Responsibility
 * - Shared per-process services injected into the router (AppState)
 * - Clone is cheap; nothing here is mutated after startup
 */
use crate::services::auth::SessionService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub sessions: SessionService,
}

impl AppState {
    pub fn new(sessions: SessionService) -> Self {
        Self { sessions }
    }
}
