use axum::extract::{FromRef, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use renoquote::config::AppConfig;
use renoquote::error::AppError;
use renoquote::pricing::{
    ExtrasCsvImporter, PricingConfig, ProjectInput, QuoteEngine, QuoteRecord, QuoteSet,
};
use renoquote::telemetry;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
struct AppState {
    engine: Arc<QuoteEngine>,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

impl FromRef<AppState> for Arc<QuoteEngine> {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "Renovation Quote Service",
    about = "Price bathroom renovation projects from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price a project snapshot and print the three quote options
    Quote(QuoteArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Project snapshot as JSON; absent fields fall back to the
    /// zero-cost baseline
    #[arg(long)]
    input: PathBuf,
    /// Optional CSV of extra line items (description,cost[,category])
    #[arg(long)]
    extras_csv: Option<PathBuf>,
    /// Optional JSON pricing policy replacing the built-in tariffs
    #[arg(long)]
    tariff: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct QuoteResponse {
    floor_area: f64,
    main: QuoteRecord,
    option1: QuoteRecord,
    option2: QuoteRecord,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Quote(args) => run_quote(args),
    }
}

fn load_tariff(path: Option<&Path>) -> Result<PricingConfig, AppError> {
    match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            serde_json::from_reader(file).map_err(AppError::Tariff)
        }
        None => Ok(PricingConfig::default()),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config)?;

    let tariff = load_tariff(config.tariff_file.as_deref())?;
    let engine = Arc::new(QuoteEngine::new(tariff));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        engine,
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/quote", post(quote_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "renovation quote service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let file = std::fs::File::open(&args.input)?;
    let mut input: ProjectInput = serde_json::from_reader(file)?;

    if let Some(path) = args.extras_csv {
        let mut extras = ExtrasCsvImporter::from_path(path)?;
        input.extra_items.append(&mut extras);
    }

    let engine = QuoteEngine::new(load_tariff(args.tariff.as_deref())?);
    let quotes = engine.quote(&input);
    render_quotes(&input, &quotes);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn quote_endpoint(
    State(engine): State<Arc<QuoteEngine>>,
    Json(input): Json<ProjectInput>,
) -> Json<QuoteResponse> {
    let quotes = engine.quote(&input);

    debug!(
        floor_area = input.bathroom_details.floor_area(),
        main_total = quotes.main.total_payable,
        option1_total = quotes.option1.total_payable,
        option2_total = quotes.option2.total_payable,
        "priced project snapshot"
    );

    Json(QuoteResponse {
        floor_area: input.bathroom_details.floor_area(),
        main: quotes.main,
        option1: quotes.option1,
        option2: quotes.option2,
    })
}

fn render_quotes(input: &ProjectInput, quotes: &QuoteSet) {
    println!("Renovation quote ({})", Local::now().date_naive());
    println!(
        "Floor area: {:.2} m2 ({} x {} cm)",
        input.bathroom_details.floor_area(),
        input.bathroom_details.width,
        input.bathroom_details.length
    );

    for record in quotes.records() {
        println!("\n{}", record.strategy.label());
        println!(
            "- Labor: {:.2} SEK ({:.2} before discount, {:.2} tax deduction)",
            record.labor_payable, record.labor_before_discount, record.tax_deduction
        );
        println!(
            "- Material: {:.2} SEK ({:.2} before discount)",
            record.material_payable, record.material_before_discount
        );
        println!(
            "- Other: {:.2} SEK ({:.2} before discount)",
            record.other_payable, record.other_before_discount
        );
        println!(
            "- Discount: {:.2} SEK per category",
            record.discount_per_category
        );
        println!("- Total payable: {:.2} SEK", record.total_payable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::json;
    use tower::ServiceExt;

    fn engine() -> Arc<QuoteEngine> {
        Arc::new(QuoteEngine::default())
    }

    fn worked_example() -> ProjectInput {
        let mut input: ProjectInput = serde_json::from_value(json!({
            "bathroom_details": { "width": 200.0, "length": 150.0, "height": 240.0 }
        }))
        .expect("snapshot parses");
        input.personal_details.has_elevator = true;
        input.personal_details.good_stairwell_access = true;
        input.personal_details.indoor_workspace = true;
        input.appliances.rcd = true;
        input
    }

    #[tokio::test]
    async fn quote_endpoint_returns_all_three_options() {
        let Json(body) = super::quote_endpoint(State(engine()), Json(worked_example())).await;

        assert_eq!(body.floor_area, 3.0);
        assert!((body.main.total_payable - 123_030.0).abs() < 1e-6);
        assert_eq!(body.option1.strategy.label(), "Total renovation, simpler form");
        assert!(body.option2.labor_before_discount > body.option1.labor_before_discount);
    }

    #[tokio::test]
    async fn quote_route_accepts_json_over_http() {
        let app = Router::new()
            .route("/api/v1/quote", post(quote_endpoint))
            .with_state(engine());
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/quote")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("body is JSON");
        assert_eq!(value["floor_area"], 0.0);
        assert!(value["main"]["total_payable"].is_number());
    }

    #[tokio::test]
    async fn quote_endpoint_defaults_absent_fields() {
        let input: ProjectInput = serde_json::from_value(json!({})).expect("empty body parses");
        let Json(body) = super::quote_endpoint(State(engine()), Json(input)).await;

        assert_eq!(body.floor_area, 0.0);
        // Bundle bases minus discounts still price out without any form data.
        assert_eq!(body.option1.labor_before_discount, 24_500.0);
        assert_eq!(body.option2.material_after_discount, 29_000.0);
    }

    #[test]
    fn absent_tariff_path_falls_back_to_builtin_policy() {
        let tariff = load_tariff(None).expect("default tariff");
        assert_eq!(tariff, PricingConfig::default());
    }
}
