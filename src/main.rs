use answer_processor_api::{create_app, init_logging};

#[tokio::main]
async fn main() {
    init_logging();

    let app = create_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
