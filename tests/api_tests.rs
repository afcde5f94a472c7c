// tests/api_tests.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use portfolio::{
    config::{AppConfig, AppState},
    routes::app_router,
};

fn app() -> Router {
    let state = AppState::from_config(AppConfig::default()).expect("catálogo padrão");
    app_router(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// --- Catálogo ---

#[tokio::test]
async fn health_check_answers_ok() {
    let app = app();
    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".into()));
}

#[tokio::test]
async fn lists_and_filters_properties() {
    let app = app();

    let (status, body) = send(&app, get("/api/properties")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[0]["annualOpEx"], json!(25_000_000.0));
    assert_eq!(body[0]["type"], "Headquarters");

    let (status, body) = send(&app, get("/api/properties?status=Owned")).await;
    assert_eq!(status, StatusCode::OK);
    let owned = body.as_array().unwrap();
    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|p| p["status"] == "Owned" && p["leaseExpiry"].is_null()));
}

#[tokio::test]
async fn unknown_property_is_404_in_requested_language() {
    let app = app();

    let (status, body) = send(&app, get("/api/properties/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Property 99 was not found.");

    let request = Request::builder()
        .uri("/api/properties/99")
        .header(header::ACCEPT_LANGUAGE, "pt-BR,pt;q=0.9,en;q=0.8")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Imóvel 99 não encontrado.");
}

// --- Projeção ---

#[tokio::test]
async fn projection_with_equal_growth_recommends_relocate_without_roi() {
    let app = app();
    let (status, body) = send(&app, get("/api/properties/1/projection")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["horizonYears"], 5);
    assert_eq!(body["stay"]["yearly"].as_array().unwrap().len(), 5);
    assert_eq!(body["relocate"]["initialCost"], json!(1_201_500.0));
    assert_eq!(body["recommendation"], "Relocate");
    assert!(body["roi"].is_null());
    assert!(body["netSavings"].as_f64().unwrap() < 0.0);
}

#[tokio::test]
async fn projection_rejects_out_of_range_horizon() {
    let app = app();

    let (status, body) = send(&app, get("/api/properties/1/projection?years=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["years"].is_array());

    let (status, _) = send(&app, get("/api/properties/1/projection?growth=-1")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, get("/api/properties/1/projection?growth=1e300")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn toggles_only_change_display_series() {
    let app = app();
    let (_, on) = send(&app, get("/api/properties/3/projection")).await;
    let (_, off) = send(&app, get("/api/properties/3/projection?includeMoveCosts=false")).await;

    assert_eq!(on["relocate"]["total"], off["relocate"]["total"]);
    assert_eq!(on["netSavings"], off["netSavings"]);
    assert_eq!(off["relocate"]["display"], off["relocate"]["yearly"]);
    assert_ne!(on["relocate"]["display"][0], on["relocate"]["yearly"][0]);
}

#[tokio::test]
async fn breakdown_respects_toggles_and_market_comparison() {
    let app = app();

    let (status, body) = send(&app, get("/api/properties/3/breakdown?includeFitoutCosts=false")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["fitout"], json!(0.0));
    assert_eq!(body["breakdown"]["move"], json!(850_000.0));
    assert_eq!(body["market"]["marketRate"], json!(95.0));

    let (_, owned) = send(&app, get("/api/properties/1/breakdown")).await;
    assert_eq!(owned["breakdown"]["rent"], json!(0.0));
    assert!(owned["market"].is_null());
}

// --- Cenários ---

#[tokio::test]
async fn baseline_scenario_is_listed_and_evaluated() {
    let app = app();

    let (status, body) = send(&app, get("/api/scenarios")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 1);

    let (status, body) = send(&app, get("/api/scenarios/1/results")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["scenarioId"], 1);
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 10);

    let (status, _) = send(&app, get("/api/scenarios/42/results")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_scenario_validates_payload() {
    let app = app();

    let (status, body) = send(&app, post_json("/api/scenarios", json!({ "name": "Dense", "density": 0 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "One or more fields are invalid.");

    let bad_policy = json!({
        "name": "Remote",
        "companyPolicy": { "remoteWorkPercentage": 140 }
    });
    let (status, _) = send(&app, post_json("/api/scenarios", bad_policy)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let runaway = json!({ "name": "Runaway", "opexInflation": 1e300 });
    let (status, body) = send(&app, post_json("/api/scenarios", runaway)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["opex_inflation"].is_array());

    let (status, body) = send(&app, post_json("/api/scenarios", json!({ "name": "Hybrid First", "density": 120 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
    assert_eq!(body["density"], json!(120.0));
    // Ausentes assumem o cenário base
    assert_eq!(body["opexInflation"], json!(3.0));
}

#[tokio::test]
async fn compare_picks_the_scenario_with_greatest_savings() {
    let app = app();
    let hybrid = json!({
        "name": "Hybrid",
        "companyPolicy": { "remoteWorkPercentage": 50, "deskSharingRatio": 1.5 }
    });
    let (status, created) = send(&app, post_json("/api/scenarios", hybrid)).await;
    assert_eq!(status, StatusCode::CREATED);
    let hybrid_id = created["id"].as_u64().unwrap();

    let (status, body) = send(&app, post_json("/api/scenarios/compare", json!({ "scenarioIds": [1, hybrid_id] }))).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let best = entries
        .iter()
        .map(|e| e["results"]["totalSavings"].as_f64().unwrap())
        .fold(f64::NEG_INFINITY, f64::max);
    let best_id = body["bestScenarioId"].as_u64().unwrap();
    let winner = entries.iter().find(|e| e["scenario"]["id"].as_u64() == Some(best_id)).unwrap();
    assert_eq!(winner["results"]["totalSavings"].as_f64().unwrap(), best);
}

#[tokio::test]
async fn compare_rejects_bad_id_lists() {
    let app = app();

    let (status, _) = send(&app, post_json("/api/scenarios/compare", json!({ "scenarioIds": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post_json("/api/scenarios/compare", json!({ "scenarioIds": [1, 1, 1, 1] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, post_json("/api/scenarios/compare", json!({ "scenarioIds": [1, 7] }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Scenario 7 was not found.");
}

// --- Contratos e dashboard ---

#[tokio::test]
async fn malformed_query_strings_get_localized_json_errors() {
    let app = app();

    let (status, body) = send(&app, get("/api/leases?sort=bogus")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid parameter:"));

    let request = Request::builder()
        .uri("/api/properties/1/projection?years=abc")
        .header(header::ACCEPT_LANGUAGE, "pt")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Parâmetro inválido:"));

    let (status, _) = send(&app, get("/api/properties?status=Rented")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn lease_summary_and_rows() {
    let app = app();

    let (status, summary) = send(&app, get("/api/leases/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalProperties"], 10);
    assert_eq!(summary["leasedProperties"], 8);
    assert_eq!(summary["ownedProperties"], 2);

    let (status, rows) = send(&app, get("/api/leases?filter=owned&sort=employees&direction=desc")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["employees"], 2500);
    assert_eq!(rows[1]["employees"], 1200);

    let (status, rows) = send(&app, get("/api/leases?sort=recommendation")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = rows.as_array().unwrap();
    assert_eq!(rows[0]["officeRecommendation"], "Evaluate Renewal");
    assert_eq!(rows[rows.len() - 1]["officeRecommendation"], "Stay");
}

#[tokio::test]
async fn dashboard_summary_and_map() {
    let app = app();

    let (status, summary) = send(&app, get("/api/dashboard/summary")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalEmployees"], 7050);
    assert_eq!(summary["portfolioUtilization"], 84);

    let (status, markers) = send(&app, get("/api/dashboard/map")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(markers.as_array().unwrap().len(), 10);
    assert_eq!(markers[0]["densityRadius"], 24_000);
}
