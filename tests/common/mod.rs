#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_test::TestServer;
use hawthorne_gateway::api;
use hawthorne_gateway::application::services::SubscriptionService;
use hawthorne_gateway::domain::backend::BackendClient;
use hawthorne_gateway::domain::click_tracker::ClickTracker;
use hawthorne_gateway::infrastructure::backend::HttpBackendClient;
use hawthorne_gateway::state::AppState;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const FRONTEND_BASE_URL: &str = "http://frontend.test";

/// How the fake backend answers each endpoint.
#[derive(Clone)]
pub struct BackendBehavior {
    pub login: StatusCode,
    pub update_user: StatusCode,
    pub get_user: (StatusCode, String),
    pub trigger: StatusCode,
    /// Status per click attempt; the last entry repeats.
    pub click: Vec<StatusCode>,
    /// How long each click call takes before answering. Calls are recorded on arrival.
    pub click_delay: Duration,
}

impl Default for BackendBehavior {
    fn default() -> Self {
        Self {
            login: StatusCode::OK,
            update_user: StatusCode::OK,
            get_user: (StatusCode::OK, sample_profile().to_string()),
            trigger: StatusCode::OK,
            click: vec![StatusCode::OK],
            click_delay: Duration::ZERO,
        }
    }
}

/// Everything the fake backend has received.
#[derive(Default)]
pub struct Recorded {
    pub login: Mutex<Vec<Value>>,
    pub update_user: Mutex<Vec<Value>>,
    pub get_user: Mutex<Vec<String>>,
    pub trigger: Mutex<Vec<Value>>,
    pub clicks: Mutex<Vec<HashMap<String, String>>>,
}

#[derive(Clone)]
struct FakeState {
    behavior: Arc<BackendBehavior>,
    recorded: Arc<Recorded>,
}

/// A real HTTP server on an ephemeral port standing in for the backend.
pub struct FakeBackend {
    pub base_url: String,
    pub recorded: Arc<Recorded>,
}

impl FakeBackend {
    pub async fn start(behavior: BackendBehavior) -> Self {
        let recorded = Arc::new(Recorded::default());
        let state = FakeState {
            behavior: Arc::new(behavior),
            recorded: recorded.clone(),
        };

        let app = Router::new()
            .route("/login", post(fake_login))
            .route("/user", post(fake_update_user))
            .route("/user/{id}", get(fake_get_user))
            .route("/trigger", post(fake_trigger))
            .route("/click", get(fake_click))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn login_calls(&self) -> Vec<Value> {
        self.recorded.login.lock().unwrap().clone()
    }

    pub fn update_user_calls(&self) -> Vec<Value> {
        self.recorded.update_user.lock().unwrap().clone()
    }

    pub fn get_user_calls(&self) -> Vec<String> {
        self.recorded.get_user.lock().unwrap().clone()
    }

    pub fn trigger_calls(&self) -> Vec<Value> {
        self.recorded.trigger.lock().unwrap().clone()
    }

    pub fn click_calls(&self) -> Vec<HashMap<String, String>> {
        self.recorded.clicks.lock().unwrap().clone()
    }

    /// Polls until at least `n` click calls arrived or two seconds passed.
    pub async fn wait_for_clicks(&self, n: usize) -> bool {
        for _ in 0..200 {
            if self.click_calls().len() >= n {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }
}

async fn fake_login(State(st): State<FakeState>, Json(body): Json<Value>) -> StatusCode {
    st.recorded.login.lock().unwrap().push(body);
    st.behavior.login
}

async fn fake_update_user(State(st): State<FakeState>, Json(body): Json<Value>) -> StatusCode {
    st.recorded.update_user.lock().unwrap().push(body);
    st.behavior.update_user
}

async fn fake_get_user(State(st): State<FakeState>, Path(id): Path<String>) -> (StatusCode, String) {
    st.recorded.get_user.lock().unwrap().push(id);
    st.behavior.get_user.clone()
}

async fn fake_trigger(State(st): State<FakeState>, Json(body): Json<Value>) -> StatusCode {
    st.recorded.trigger.lock().unwrap().push(body);
    st.behavior.trigger
}

async fn fake_click(
    State(st): State<FakeState>,
    Query(params): Query<HashMap<String, String>>,
) -> StatusCode {
    let attempt = {
        let mut clicks = st.recorded.clicks.lock().unwrap();
        clicks.push(params);
        clicks.len()
    };
    if !st.behavior.click_delay.is_zero() {
        tokio::time::sleep(st.behavior.click_delay).await;
    }

    let statuses = &st.behavior.click;
    statuses
        .get(attempt - 1)
        .or_else(|| statuses.last())
        .copied()
        .unwrap_or(StatusCode::OK)
}

pub fn sample_profile() -> Value {
    json!({
        "email_address": "robin@example.com",
        "preferred_name": "Robin",
        "favorite_keywords": ["lego", "tea"],
        "favorites_only": false,
        "unsubscribe": false
    })
}

/// A base URL nothing listens on, for connection-refused scenarios.
pub async fn unreachable_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn create_test_state(backend_url: &str) -> AppState {
    let backend: Arc<dyn BackendClient> =
        Arc::new(HttpBackendClient::new(backend_url, Duration::from_secs(2)).unwrap());

    let subscription_service = Arc::new(SubscriptionService::new(
        backend.clone(),
        FRONTEND_BASE_URL,
    ));
    let click_tracker = ClickTracker::new(backend, Duration::ZERO);

    AppState::new(subscription_service, click_tracker)
}

/// API routes mounted at `/api`, without the rate limiter.
pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
