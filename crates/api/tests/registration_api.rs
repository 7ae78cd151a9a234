//! HTTP-level integration tests for the `/registration` endpoint and the
//! static frontend bundle.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router.
//! The app clock is pinned to 2024-06-15.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, get, post_json, post_raw};
use serde_json::{json, Value};

fn individual_form() -> Value {
    json!({
        "singUpType": "pf",
        "email": "ana@example.com",
        "password": "s3cret-pass",
        "name": "Ana Souza",
        "cpf": "529.982.247-25",
        "birthDate": "10/03/1990",
        "phone": "(11) 99999-8888",
    })
}

fn business_form() -> Value {
    json!({
        "singUpType": "pj",
        "email": "contato@empresa.com.br",
        "password": "s3cret-pass",
        "pjName": "Empresa LTDA",
        "cnpj": "11444777000161",
        "pjPhone": "(11) 3333-4444",
        "startUpDate": "01/02/2010",
    })
}

fn with(mut form: Value, key: &str, value: Value) -> Value {
    form[key] = value;
    form
}

fn without(mut form: Value, key: &str) -> Value {
    form.as_object_mut().unwrap().remove(key);
    form
}

// ---------------------------------------------------------------------------
// Test: valid forms are created
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_individual_returns_201() {
    let app = build_test_app();
    let response = post_json(app.router(), "/registration", individual_form()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Registrado com sucesso" })
    );
}

#[tokio::test]
async fn valid_business_returns_201() {
    let app = build_test_app();
    let response = post_json(app.router(), "/registration", business_form()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: rule failures carry isValid: false
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_email_returns_400_with_is_valid_false() {
    let app = build_test_app();
    let form = with(individual_form(), "email", json!("ana@example"));
    let response = post_json(app.router(), "/registration", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Email inválido", "isValid": false })
    );
}

#[tokio::test]
async fn invalid_cnpj_check_digit_returns_400() {
    let app = build_test_app();
    let form = with(business_form(), "cnpj", json!("11444777000162"));
    let response = post_json(app.router(), "/registration", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "CNPJ inválido");
    assert_eq!(json["isValid"], false);
}

#[tokio::test]
async fn first_failing_field_is_reported() {
    let app = build_test_app();
    let form = with(individual_form(), "password", json!("curta"));
    let form = with(form, "phone", json!("123"));
    let response = post_json(app.router(), "/registration", form).await;

    let json = body_json(response).await;
    assert_eq!(json["message"], "A senha deve ter no mínimo 8 caracteres");
}

#[tokio::test]
async fn array_and_object_values_are_rejected() {
    let app = build_test_app();

    let form = with(individual_form(), "name", json!(["a"]));
    let response = post_json(app.router(), "/registration", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "O nome deve ter no mínimo 3 caracteres", "isValid": false })
    );

    let form = with(business_form(), "cnpj", json!({ "cnpj": "11444777000161" }));
    let response = post_json(app.router(), "/registration", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "CNPJ inválido", "isValid": false })
    );
}

#[tokio::test]
async fn emoji_password_counts_utf16_units() {
    let app = build_test_app();
    let form = with(individual_form(), "password", json!("😀😀😀😀"));
    let response = post_json(app.router(), "/registration", form).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let form = with(individual_form(), "name", json!("😀"));
    let response = post_json(app.router(), "/registration", form).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "O nome deve ter no mínimo 3 caracteres");
}

// ---------------------------------------------------------------------------
// Test: date rules use the injected clock
// ---------------------------------------------------------------------------

#[tokio::test]
async fn birth_date_today_is_accepted() {
    let app = build_test_app();
    let form = with(individual_form(), "birthDate", json!("15/06/2024"));
    let response = post_json(app.router(), "/registration", form).await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn start_up_date_tomorrow_is_rejected() {
    let app = build_test_app();
    let form = with(business_form(), "startUpDate", json!("16/06/2024"));
    let response = post_json(app.router(), "/registration", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "Data não pode ser futura", "isValid": false })
    );
}

// ---------------------------------------------------------------------------
// Test: presence and kind failures carry only a message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_cpf_returns_required_message() {
    let app = build_test_app();
    let form = without(individual_form(), "cpf");
    let response = post_json(app.router(), "/registration", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "O campo cpf é obrigatório" })
    );
}

#[tokio::test]
async fn empty_field_counts_as_missing() {
    let app = build_test_app();
    let form = with(business_form(), "pjName", json!(""));
    let response = post_json(app.router(), "/registration", form).await;

    let json = body_json(response).await;
    assert_eq!(json["message"], "O campo pjName é obrigatório");
    assert!(json.get("isValid").is_none());
}

#[tokio::test]
async fn unknown_kind_returns_400() {
    let app = build_test_app();
    for kind in [json!(""), json!("pfj"), json!(null)] {
        let form = with(individual_form(), "singUpType", kind);
        let response = post_json(app.router(), "/registration", form).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Tipo de cadastro inválido" })
        );
    }
}

#[tokio::test]
async fn empty_object_is_an_invalid_kind() {
    let app = build_test_app();
    let response = post_json(app.router(), "/registration", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Tipo de cadastro inválido");
}

// ---------------------------------------------------------------------------
// Test: unreadable bodies are 400 with a JSON message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = build_test_app();
    let response = post_raw(
        app.router(),
        "/registration",
        Some("application/json"),
        "{\"singUpType\": ",
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn non_object_body_returns_400() {
    let app = build_test_app();
    let response = post_json(app.router(), "/registration", json!(["pf"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

#[tokio::test]
async fn missing_content_type_returns_400() {
    let app = build_test_app();
    let response = post_raw(
        app.router(),
        "/registration",
        None,
        individual_form().to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["message"].is_string());
}

// ---------------------------------------------------------------------------
// Test: frontend bundle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_registration_serves_index_html() {
    let app = build_test_app();
    let response = get(app.router(), "/registration").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, common::INDEX_HTML);
}

#[tokio::test]
async fn root_serves_bundle_index() {
    let app = build_test_app();
    let response = get(app.router(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, common::INDEX_HTML);
}

#[tokio::test]
async fn public_assets_are_served() {
    let app = build_test_app();
    let response = get(app.router(), "/robots.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, common::ROBOTS_TXT);
}

#[tokio::test]
async fn unknown_asset_returns_404() {
    let app = build_test_app();
    let response = get(app.router(), "/assets/missing.js").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
