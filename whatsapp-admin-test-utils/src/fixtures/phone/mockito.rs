use mockito::Mock;
use serde_json::Value;

use crate::{constant::TEST_SALVY_TOKEN, fixtures::phone::PhoneFixtures};

impl<'a> PhoneFixtures<'a> {
    /// Create a `POST /api/virtual-phone-accounts` endpoint.
    ///
    /// # Arguments
    /// - `status` - Status code to answer with
    /// - `body` - JSON body to answer with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_purchase_endpoint(
        &mut self,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/virtual-phone-accounts")
            .match_header("authorization", format!("Bearer {}", TEST_SALVY_TOKEN).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
