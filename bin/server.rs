// SWIFT GPI Simulator - Web Server
// Browser front end for the same simulated flows the TUI drives

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use swift_gpi_sim::{
    synthesize, transaction_history, validate, BankDirectory, MessageStore, PaymentInstruction,
    StoredMessage,
};

/// Shared application state
#[derive(Clone)]
struct AppState {
    store: Arc<Mutex<MessageStore>>,
    directory: Arc<BankDirectory>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// POST /api/validate request body
#[derive(Deserialize)]
struct ValidateRequest {
    trn: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/banks - The static sender-bank directory
async fn get_banks(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.directory.all().to_vec()))
}

/// GET /api/transactions - The fixed mock transaction history
async fn get_transactions() -> impl IntoResponse {
    Json(ApiResponse::ok(transaction_history()))
}

/// POST /api/validate - Mock TRN validation
async fn validate_trn(Json(request): Json<ValidateRequest>) -> impl IntoResponse {
    let verdict = validate(&request.trn, &mut rand::thread_rng());
    Json(ApiResponse::ok(verdict))
}

/// POST /api/messages - Synthesize a message and keep it for the session
async fn create_message(
    State(state): State<AppState>,
    Json(mut instruction): Json<PaymentInstruction>,
) -> impl IntoResponse {
    // The form submits the bank name; the BIC comes from the directory
    if instruction.sender_bic.is_empty() {
        if let Some(bic) = state.directory.bic_for(&instruction.sender_bank) {
            instruction.sender_bic = bic.to_string();
        }
    }

    let message = synthesize(&instruction, &mut rand::thread_rng(), chrono::Utc::now());

    let mut store = state.store.lock().unwrap();
    let stored = store.store(instruction, message).clone();

    // Database stand-in, same as the TUI
    println!("💾 Stored in database (simulated): {}", stored.id);

    (StatusCode::CREATED, Json(ApiResponse::ok(stored))).into_response()
}

/// GET /api/messages - Everything created this session
async fn list_messages(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().unwrap();
    let messages: Vec<StoredMessage> = store.all().to_vec();
    Json(ApiResponse::ok(messages))
}

/// GET / - Serve the dashboard page
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 SWIFT GPI Simulator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Create shared state
    let state = AppState {
        store: Arc::new(Mutex::new(MessageStore::new())),
        directory: Arc::new(BankDirectory::new()),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/banks", get(get_banks))
        .route("/transactions", get(get_transactions))
        .route("/validate", post(validate_trn))
        .route("/messages", post(create_message).get(list_messages))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .nest_service("/static", ServeDir::new("web"))
        .layer(CorsLayer::permissive());

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/transactions");
    println!("   UI:  http://localhost:3000");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
