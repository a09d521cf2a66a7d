// ABOUTME: Test support utilities.
// ABOUTME: Provides an in-memory CloudApi fake, fixtures, and tracing setup.

use async_trait::async_trait;
use next_target_code::api::{ApiError, CloudApi, LinkedService, Service, Stack};
use std::collections::HashMap;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("next_target_code=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Resource path under which a service is served.
pub fn service_path(name: &str) -> String {
    format!("/api/app/v1/service/{name}/")
}

pub fn stack(name: &str, services: &[&str]) -> Stack {
    Stack {
        name: name.to_string(),
        services: services.iter().map(|s| service_path(s)).collect(),
    }
}

pub fn service(name: &str, linked: &[&str]) -> Service {
    Service {
        name: name.to_string(),
        linked_to_service: linked
            .iter()
            .map(|l| LinkedService {
                name: l.to_string(),
            })
            .collect(),
    }
}

/// In-memory API keyed by service path.
#[derive(Default)]
pub struct FakeApi {
    stacks: Vec<Stack>,
    services: HashMap<String, Service>,
    fail_stacks: bool,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stack(mut self, stack: Stack) -> Self {
        self.stacks.push(stack);
        self
    }

    /// Serve `service` at `path`, which need not match its name.
    pub fn with_service_at(mut self, path: &str, service: Service) -> Self {
        self.services.insert(path.to_string(), service);
        self
    }

    pub fn with_service(self, service: Service) -> Self {
        let path = service_path(&service.name);
        self.with_service_at(&path, service)
    }

    pub fn failing_stacks(mut self) -> Self {
        self.fail_stacks = true;
        self
    }
}

#[async_trait]
impl CloudApi for FakeApi {
    async fn list_stacks(&self) -> Result<Vec<Stack>, ApiError> {
        if self.fail_stacks {
            return Err(ApiError::Status {
                url: "fake:/api/app/v1/stack/".to_string(),
                status: 500,
            });
        }
        Ok(self.stacks.clone())
    }

    async fn get_service(&self, path: &str) -> Result<Service, ApiError> {
        self.services
            .get(path)
            .cloned()
            .ok_or_else(|| ApiError::Status {
                url: format!("fake:{path}"),
                status: 404,
            })
    }
}
