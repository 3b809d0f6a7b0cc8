//! Shared test utilities.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use jobapps::placement::PlacementRoutes;
use jobapps::{ApiSession, AuthToken, HttpPlacementGateway};
use rstest_bdd::Slot;
use serde_json::{Value, json};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Token the mock server expects.
pub const TEST_TOKEN: &str = "0123456789abcdef";

/// Shared runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created or if the slots
/// behave unexpectedly.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    if runtime.with_ref(|_| ()).is_none() {
        runtime.set(SharedRuntime::new(Runtime::new()?));
    }

    let shared_runtime = runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Builds a gateway pointed at the mock server with the default routes.
///
/// # Panics
///
/// Panics if the server URI or token is rejected.
pub fn gateway_for(server_uri: &str) -> HttpPlacementGateway {
    let token = AuthToken::new(TEST_TOKEN).expect("test token should be valid");
    let session = ApiSession::new(server_uri, PlacementRoutes::default(), token)
        .expect("mock server URI should be valid");
    HttpPlacementGateway::new(session, Duration::from_secs(5)).expect("client should build")
}

/// JSON body for one applicant as the placement API returns it.
pub fn applicant_json(id: u64, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Student {id}"),
        "roll_no": format!("R{id:04}"),
        "email": format!("student{id}@example.edu"),
        "cpi": 8.5,
        "status": status
    })
}
