//! Declarative test builder.
//!
//! The builder pattern allows chaining endpoint configuration together, with all mocks created
//! during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    user_endpoints: Vec<(String, usize)>, // (access_token, expected_requests)
    rejected_user_endpoints: Vec<(String, usize)>,
    token_endpoints: Vec<(String, String, String, usize)>, // (grant_type, access, refresh, ..)
    rejected_token_endpoints: Vec<(String, usize)>,
    logout_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
    phone_purchase_endpoints: Vec<(usize, Value, usize)>, // (status, body, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints configured.
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            user_endpoints: Vec::new(),
            rejected_user_endpoints: Vec::new(),
            token_endpoints: Vec::new(),
            rejected_token_endpoints: Vec::new(),
            logout_endpoints: Vec::new(),
            phone_purchase_endpoints: Vec::new(),
        }
    }

    /// Add a `GET /auth/v1/user` endpoint that accepts `access_token`.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token the request must carry
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user_endpoint(mut self, access_token: &str, expected_requests: usize) -> Self {
        self.user_endpoints
            .push((access_token.to_string(), expected_requests));
        self
    }

    /// Add a `GET /auth/v1/user` endpoint that rejects `access_token` with a 401.
    pub fn with_rejected_user_endpoint(
        mut self,
        access_token: &str,
        expected_requests: usize,
    ) -> Self {
        self.rejected_user_endpoints
            .push((access_token.to_string(), expected_requests));
        self
    }

    /// Add a `POST /auth/v1/token` endpoint for `grant_type` returning a session.
    ///
    /// # Arguments
    /// - `grant_type` - `pkce` for code exchange, `refresh_token` for refresh
    /// - `access_token` - Access token of the returned session
    /// - `refresh_token` - Refresh token of the returned session
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_token_endpoint(
        mut self,
        grant_type: &str,
        access_token: &str,
        refresh_token: &str,
        expected_requests: usize,
    ) -> Self {
        self.token_endpoints.push((
            grant_type.to_string(),
            access_token.to_string(),
            refresh_token.to_string(),
            expected_requests,
        ));
        self
    }

    /// Add a `POST /auth/v1/token` endpoint for `grant_type` rejecting the grant with a 400.
    pub fn with_rejected_token_endpoint(
        mut self,
        grant_type: &str,
        expected_requests: usize,
    ) -> Self {
        self.rejected_token_endpoints
            .push((grant_type.to_string(), expected_requests));
        self
    }

    /// Add a `POST /auth/v1/logout` endpoint answering with `status`.
    pub fn with_logout_endpoint(mut self, status: usize, expected_requests: usize) -> Self {
        self.logout_endpoints.push((status, expected_requests));
        self
    }

    /// Add a `POST /api/virtual-phone-accounts` endpoint answering with `status` and `body`.
    pub fn with_phone_purchase_endpoint(
        mut self,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.phone_purchase_endpoints
            .push((status, body, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test context by starting the mock server and creating all configured endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment ready for use
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // Custom endpoints are created first to allow proper sequential mockito matching
        // when tests need to create multiple mocks for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (access_token, expected) in self.user_endpoints {
            mocks.push(setup.auth().create_user_endpoint(&access_token, expected));
        }

        for (access_token, expected) in self.rejected_user_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_rejected_user_endpoint(&access_token, expected),
            );
        }

        for (grant_type, access_token, refresh_token, expected) in self.token_endpoints {
            mocks.push(setup.auth().create_token_endpoint(
                &grant_type,
                &access_token,
                &refresh_token,
                expected,
            ));
        }

        for (grant_type, expected) in self.rejected_token_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_rejected_token_endpoint(&grant_type, expected),
            );
        }

        for (status, expected) in self.logout_endpoints {
            mocks.push(setup.auth().create_logout_endpoint(status, expected));
        }

        for (status, body, expected) in self.phone_purchase_endpoints {
            mocks.push(setup.phone().create_purchase_endpoint(status, body, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
