//! Router-level tests for the customer resource.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; the
//! customer service is either the in-memory reference implementation or a
//! recording wrapper that captures what the handlers delegate.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use sugarcane_api::config::ApiConfig;
use sugarcane_api::models::{Address, AddressFields, Contact, ContactFields, SessionContext};
use sugarcane_api::routes;
use sugarcane_api::services::{
    CustomerService, InMemoryBasketService, InMemoryCountryService, InMemoryCustomerService,
    InMemoryShippingService, ServiceError,
};
use sugarcane_api::state::AppState;
use sugarcane_core::{AddressId, AddressType};

// ============================================================================
// Test support
// ============================================================================

type RegisterCall = (ContactFields, Option<AddressFields>, Option<AddressFields>);

/// Wraps the in-memory service and records `register_customer` arguments.
#[derive(Default)]
struct RecordingCustomerService {
    inner: InMemoryCustomerService,
    register_calls: Mutex<Vec<RegisterCall>>,
}

#[async_trait]
impl CustomerService for RecordingCustomerService {
    async fn contact(&self, session: &SessionContext) -> Result<Option<Contact>, ServiceError> {
        self.inner.contact(session).await
    }

    async fn addresses(
        &self,
        session: &SessionContext,
        kind: Option<AddressType>,
    ) -> Result<Vec<Address>, ServiceError> {
        self.inner.addresses(session, kind).await
    }

    async fn register_customer(
        &self,
        session: &SessionContext,
        contact: ContactFields,
        billing: Option<AddressFields>,
        delivery: Option<AddressFields>,
    ) -> Result<Contact, ServiceError> {
        self.register_calls
            .lock()
            .await
            .push((contact.clone(), billing.clone(), delivery.clone()));
        self.inner
            .register_customer(session, contact, billing, delivery)
            .await
    }

    async fn update_contact(
        &self,
        session: &SessionContext,
        fields: ContactFields,
    ) -> Result<Option<Contact>, ServiceError> {
        self.inner.update_contact(session, fields).await
    }

    async fn create_address(
        &self,
        session: &SessionContext,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError> {
        self.inner.create_address(session, fields, kind).await
    }

    async fn update_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        fields: AddressFields,
        kind: AddressType,
    ) -> Result<Address, ServiceError> {
        self.inner.update_address(session, id, fields, kind).await
    }

    async fn delete_address(
        &self,
        session: &SessionContext,
        id: AddressId,
        kind: AddressType,
    ) -> Result<(), ServiceError> {
        self.inner.delete_address(session, id, kind).await
    }
}

fn test_config() -> ApiConfig {
    ApiConfig {
        host: "127.0.0.1".parse().expect("valid host"),
        port: 0,
        base_url: "http://localhost".to_string(),
        session_secret: SecretString::from("kV9#mQ2$xR7!bN4@wL8%zD3^fH6&jS1*"),
        sentry_dsn: None,
        sentry_environment: None,
    }
}

fn app(customers: Arc<dyn CustomerService>) -> Router {
    let state = AppState::new(
        test_config(),
        customers,
        Arc::new(InMemoryShippingService),
        Arc::new(InMemoryCountryService),
        Arc::new(InMemoryBasketService::default()),
    );

    Router::new()
        .merge(routes::routes())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
        .with_state(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

fn with_cookie(mut request: Request<Body>, cookie: &str) -> Request<Body> {
    request
        .headers_mut()
        .insert(header::COOKIE, cookie.parse().expect("valid cookie"));
    request
}

/// The session cookie issued by the response, without attributes.
fn session_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .expect("valid header")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

// ============================================================================
// GET /customer
// ============================================================================

#[tokio::test]
async fn test_get_customer_without_contact_is_null() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app.oneshot(get("/customer")).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"data": null, "error": null}));
}

// ============================================================================
// POST /customer - validation
// ============================================================================

#[tokio::test]
async fn test_register_without_contact_is_rejected() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(json_request("POST", "/customer", &json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["error"]["code"], 0);
    assert_eq!(
        body["error"]["message"],
        "Missing contact data or unexpected format."
    );
}

#[tokio::test]
async fn test_register_with_scalar_contact_is_rejected() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({"contact": "mara@example.com"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Missing contact data or unexpected format."
    );
}

#[tokio::test]
async fn test_register_with_bad_delivery_address_is_rejected() {
    let customers = Arc::new(RecordingCustomerService::default());
    let app = app(customers.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({
                "contact": {"email": "mara@example.com"},
                "deliveryAddress": [1, 2, 3]
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Unexpected address format.");

    // Validation failed, so nothing was delegated.
    assert!(customers.register_calls.lock().await.is_empty());
}

#[tokio::test]
async fn test_register_normalizes_empty_billing_to_absent() {
    let customers = Arc::new(RecordingCustomerService::default());
    let app = app(customers.clone());

    let response = app
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({
                "contact": {"email": "mara@example.com"},
                "billingAddress": {}
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let calls = customers.register_calls.lock().await;
    let (contact, billing, delivery) = calls.first().expect("one register call");
    assert_eq!(contact["email"], "mara@example.com");
    assert_eq!(billing, &None);
    assert_eq!(delivery, &None);
}

// ============================================================================
// POST /customer - success reflects post-registration state
// ============================================================================

#[tokio::test]
async fn test_register_returns_the_read_payload() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({
                "contact": {"email": "mara@example.com", "firstName": "Mara"},
                "billingAddress": {"town": "Kassel"}
            }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["error"], Value::Null);
    assert_eq!(body["data"]["contact"]["email"], "mara@example.com");
    // Billing without delivery is recorded as both checkout addresses.
    let addresses = body["data"]["addresses"].as_array().expect("address list");
    assert_eq!(addresses.len(), 2);
}

#[tokio::test]
async fn test_registered_customer_is_visible_on_follow_up_get() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({"contact": {"email": "mara@example.com"}}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);

    let response = app
        .oneshot(with_cookie(get("/customer"), &cookie))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["contact"]["email"], "mara@example.com");
}

// ============================================================================
// Address sub-resource
// ============================================================================

#[tokio::test]
async fn test_guest_address_round_trip() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/customer/address?typeId=1",
            &json!({"town": "Kassel"}),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);
    let created = body_json(response).await;
    assert_eq!(created["data"]["typeId"], 1);
    assert_eq!(created["data"]["town"], "Kassel");

    let response = app
        .oneshot(with_cookie(get("/customer/address"), &cookie))
        .await
        .expect("response");
    let body = body_json(response).await;
    let listed = body["data"].as_array().expect("address list");
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_unknown_address_type_is_rejected() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(get("/customer/address?typeId=9"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Unknown address type.");
}

#[tokio::test]
async fn test_deleting_a_missing_address_is_not_found() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/customer/address/41?typeId=1")
                .body(Body::empty())
                .expect("valid request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// PUT /customer
// ============================================================================

#[tokio::test]
async fn test_update_contact_merges_and_returns_payload() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/customer",
            &json!({"contact": {"email": "mara@example.com", "firstName": "Mara"}}),
        ))
        .await
        .expect("response");
    let cookie = session_cookie(&response);

    let response = app
        .oneshot(with_cookie(
            json_request(
                "PUT",
                "/customer",
                &json!({"contact": {"firstName": "Marlene"}}),
            ),
            &cookie,
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["contact"]["firstName"], "Marlene");
    assert_eq!(body["data"]["contact"]["email"], "mara@example.com");
}

#[tokio::test]
async fn test_update_contact_requires_contact_shape() {
    let app = app(Arc::new(InMemoryCustomerService::default()));

    let response = app
        .oneshot(json_request("PUT", "/customer", &json!({"contact": 5})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(
        body["error"]["message"],
        "Missing contact data or unexpected format."
    );
}
