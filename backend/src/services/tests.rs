use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use common::model::{Account, IntakeRequest, PrimaryItPartner, RequestState, UseCase};
use common::requests::{ErrorBody, HealthResponse, OkResponse};
use serde_json::{json, Value};

use super::{configure, cors, embedded, json_config};
use crate::store::Db;

macro_rules! app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($db.clone()))
                .app_data(json_config(64 * 1024))
                .configure(configure)
                .default_service(web::route().to(embedded::process)),
        )
        .await
    };
}

macro_rules! cors_app {
    ($db:expr, $origins:expr) => {
        test::init_service(
            App::new()
                .wrap(cors($origins))
                .app_data(web::Data::new($db.clone()))
                .app_data(json_config(64 * 1024))
                .configure(configure)
                .default_service(web::route().to(embedded::process)),
        )
        .await
    };
}

fn allow_origin<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn seeded_account(db: &Db, uid: &str) {
    db.with(|conn| {
        crate::store::accounts::create(
            conn,
            Account {
                uid: uid.into(),
                team: Some("Data Analytics Team".into()),
                vp: Some("Sarah Johnson".into()),
                ..Default::default()
            },
        )
    })
    .unwrap();
}

#[actix_web::test]
async fn health_reports_running() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message, "CRM API is running");
}

#[actix_web::test]
async fn functional_areas_are_listed() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::get().uri("/api/functional-areas").to_request();
    let areas: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(areas.first().map(String::as_str), Some("Actuarial"));
    assert!(areas.iter().any(|a| a == "Claims"));
}

#[actix_web::test]
async fn account_put_only_touches_sent_fields() {
    let db = Db::open_in_memory().unwrap();
    seeded_account(&db, "ACC001");
    let app = app!(db);

    let req = test::TestRequest::put()
        .uri("/api/accounts/ACC001")
        .set_json(json!({ "health": "Yellow", "vp": null }))
        .to_request();
    let updated: Account = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.health.as_deref(), Some("Yellow"));
    assert_eq!(updated.vp, None);
    assert_eq!(updated.team.as_deref(), Some("Data Analytics Team"));

    let req = test::TestRequest::get().uri("/api/accounts/ACC001").to_request();
    let read: Account = test::call_and_read_body_json(&app, req).await;
    assert_eq!(read, updated);
}

#[actix_web::test]
async fn duplicate_account_is_conflict() {
    let db = Db::open_in_memory().unwrap();
    seeded_account(&db, "ACC001");
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .set_json(json!({ "uid": "ACC001" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn missing_account_is_json_404() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);

    let req = test::TestRequest::get().uri("/api/accounts/NOPE").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "Account NOPE not found");
}

#[actix_web::test]
async fn child_routes_follow_the_collection_layout() {
    let db = Db::open_in_memory().unwrap();
    seeded_account(&db, "ACC001");
    seeded_account(&db, "ACC002");
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/use-cases")
        .set_json(json!({ "account_uid": "ACC001", "problem": "Manual reporting" }))
        .to_request();
    let created: UseCase = test::call_and_read_body_json(&app, req).await;
    let id = created.id.unwrap();

    let req = test::TestRequest::post()
        .uri("/api/use-cases")
        .set_json(json!({ "account_uid": "ACC002", "problem": "Siloed data" }))
        .to_request();
    let _: UseCase = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/api/accounts/ACC001/use-cases").to_request();
    let listed: Vec<UseCase> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![created.clone()]);

    let req = test::TestRequest::get().uri("/api/use-cases?account_uid=ACC002").to_request();
    let filtered: Vec<UseCase> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(filtered.len(), 1);

    let req = test::TestRequest::put()
        .uri(&format!("/api/use-cases/{id}"))
        .set_json(json!({ "status": "Completed" }))
        .to_request();
    let updated: UseCase = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.status.as_deref(), Some("Completed"));
    assert_eq!(updated.problem, created.problem);

    let req = test::TestRequest::delete().uri(&format!("/api/use-cases/{id}")).to_request();
    let ok: OkResponse = test::call_and_read_body_json(&app, req).await;
    assert!(ok.ok);

    let req = test::TestRequest::delete().uri(&format!("/api/use-cases/{id}")).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn child_for_unknown_account_is_404() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::post()
        .uri("/api/platforms")
        .set_json(json!({ "account_uid": "GHOST", "platform_name": "Fabric" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn primary_partner_is_404_until_added() {
    let db = Db::open_in_memory().unwrap();
    seeded_account(&db, "ACC001");
    let app = app!(db);

    let req = test::TestRequest::get().uri("/api/accounts/ACC001/primary-it-partner").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/primary-it-partners")
        .set_json(json!({ "account_uid": "ACC001", "primary_it_partner": "John Smith" }))
        .to_request();
    let _: PrimaryItPartner = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/api/accounts/ACC001/primary-it-partner").to_request();
    let partner: PrimaryItPartner = test::call_and_read_body_json(&app, req).await;
    assert_eq!(partner.primary_it_partner.as_deref(), Some("John Smith"));
}

#[actix_web::test]
async fn submission_drops_unselected_details() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);

    let details = json!({
        "use_case_details": "Quarterly extracts",
        "describe_data": "Claims",
        "env_preferences": "[\"Snowflake\"]",
        "languages": "[\"Python\"]"
    });
    let req = test::TestRequest::post()
        .uri("/api/intake-requests")
        .set_json(json!({
            "title": "Storage for extracts",
            "has_it_partner": false,
            "help_types": "[\"consultation\",\"cloud_storage\"]",
            "additional_details": details.to_string()
        }))
        .to_request();
    let stored: IntakeRequest = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/intake-requests/{}", stored.id))
        .to_request();
    let read: IntakeRequest = test::call_and_read_body_json(&app, req).await;
    let details: Value = serde_json::from_str(read.additional_details.as_deref().unwrap()).unwrap();
    assert_eq!(details["use_case_details"], "Quarterly extracts");
    assert!(details.get("env_preferences").is_none());
    assert!(details.get("languages").is_none());
}

#[actix_web::test]
async fn malformed_body_is_unprocessable() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::post()
        .uri("/api/request-states")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert!(!body.detail.is_empty());
}

#[actix_web::test]
async fn state_assignment_round_trip() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);

    let req = test::TestRequest::post()
        .uri("/api/intake-requests")
        .set_json(json!({ "title": "Need a build", "help_types": "[\"build\"]" }))
        .to_request();
    let request: IntakeRequest = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/request-states")
        .set_json(json!({ "name": "Pending Approval", "color": "#3b82f6" }))
        .to_request();
    let state: RequestState = test::call_and_read_body_json(&app, req).await;
    let state_id = state.id.unwrap();
    let states_uri = format!("/api/intake-requests/{}/states", request.id);
    let pair_uri = format!("{states_uri}/{state_id}");

    for _ in 0..2 {
        let req = test::TestRequest::post().uri(&pair_uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    let req = test::TestRequest::get().uri(&states_uri).to_request();
    let listed: Vec<RequestState> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![state]);

    let req = test::TestRequest::post()
        .uri(&format!("/api/intake-requests/{}/states/9999", request.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    for _ in 0..2 {
        let req = test::TestRequest::delete().uri(&pair_uri).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
    let req = test::TestRequest::get().uri(&states_uri).to_request();
    let listed: Vec<RequestState> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());

    let req = test::TestRequest::get().uri("/api/intake-requests/777/states").to_request();
    let listed: Vec<RequestState> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.is_empty());
}

#[actix_web::test]
async fn invalid_state_color_is_422() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::post()
        .uri("/api/request-states")
        .set_json(json!({ "name": "Odd", "color": "red" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_web::test]
async fn unknown_api_path_is_json_404() {
    let db = Db::open_in_memory().unwrap();
    let app = app!(db);
    let req = test::TestRequest::get().uri("/api/nothing-here").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorBody = test::read_body_json(resp).await;
    assert_eq!(body.detail, "/api/nothing-here not found");
}

#[actix_web::test]
async fn preflight_from_allowed_origin_is_answered() {
    let db = Db::open_in_memory().unwrap();
    let app = cors_app!(db, &["https://crm.example.com".to_string()]);
    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/accounts")
        .insert_header((header::ORIGIN, "https://crm.example.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp).as_deref(), Some("https://crm.example.com"));
}

#[actix_web::test]
async fn allowed_origin_gets_cors_headers_on_reads() {
    let db = Db::open_in_memory().unwrap();
    let app = cors_app!(db, &["https://crm.example.com".to_string()]);
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((header::ORIGIN, "https://crm.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp).as_deref(), Some("https://crm.example.com"));
}

#[actix_web::test]
async fn wildcard_allows_any_origin() {
    let db = Db::open_in_memory().unwrap();
    let app = cors_app!(db, &["*".to_string()]);
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((header::ORIGIN, "http://localhost:5173"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(allow_origin(&resp).is_some());
}

#[actix_web::test]
async fn unlisted_origin_is_served_without_cors_headers() {
    let db = Db::open_in_memory().unwrap();
    let app = cors_app!(db, &["https://crm.example.com".to_string()]);
    let req = test::TestRequest::post()
        .uri("/api/accounts")
        .insert_header((header::ORIGIN, "http://127.0.0.1:8080"))
        .set_json(json!({"uid": "ACC009"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp), None);
}

#[actix_web::test]
async fn no_configured_origins_sends_no_cors_headers() {
    let db = Db::open_in_memory().unwrap();
    let app = cors_app!(db, &[]);
    let req = test::TestRequest::get()
        .uri("/api/health")
        .insert_header((header::ORIGIN, "https://crm.example.com"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(allow_origin(&resp), None);
}
