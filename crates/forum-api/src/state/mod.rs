//! Application state shared by all handlers

use std::sync::Arc;

use forum_common::JwtService;
use forum_service::ServiceContext;

/// Cheap to clone; handlers build services from the shared context
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
}

impl AppState {
    pub fn new(service_context: ServiceContext) -> Self {
        Self {
            service_context: Arc::new(service_context),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}
