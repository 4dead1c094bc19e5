// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint tests against a stub HTTP server

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use acc_admin_client::types::{
    AccountUserPayload, BusinessUnitPayload, BusinessUnitsPayload, Classification, CompanyPatch,
    FilterTextMatch, Platform, Product, ProductAccessLevel, ProjectFields, ProjectPayload,
    ProjectSortBy, ProjectStatus, ProjectUserPayload, ProjectUserProduct, ProjectUserSortBy,
    ProjectUserStatus, ProjectUsersImportPayload, Region, SearchOperator, Trade, Uuid,
};
use acc_admin_client::{
    AdminClient, ClientConfig, Error, GetProjectUsersOptions, GetProjectsOptions, ListOptions,
    SearchCompaniesOptions, SearchUsersOptions, StaticToken,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "8d5d1c2c-7c8e-4b4a-b1bb-0c7a1d5a9b22";
const PROJECT: &str = "ad8b6c2e-5b57-4c3a-9d1a-0f6c2b9f2a11";
const COMPANY: &str = "0bd9b1a4-3f3c-4b8b-8e5b-5c1b7f2b8a02";

fn account() -> Uuid {
    ACCOUNT.parse().unwrap()
}

fn project() -> Uuid {
    PROJECT.parse().unwrap()
}

fn client(server: &MockServer, region: Option<Region>) -> AdminClient {
    let mut config = ClientConfig::default().with_base_url(server.uri());
    if let Some(region) = region {
        config = config.with_region(region);
    }
    AdminClient::new(&config, Arc::new(StaticToken::new("test-token"))).unwrap()
}

fn project_json(name: &str) -> serde_json::Value {
    json!({
        "id": PROJECT,
        "accountId": ACCOUNT,
        "name": name,
        "type": "Office",
        "status": "active",
        "platform": "acc"
    })
}

#[tokio::test]
async fn get_projects_sends_filters_and_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/construction/admin/v1/accounts/{}/projects",
            ACCOUNT
        )))
        .and(query_param("filter[status]", "active,pending"))
        .and(query_param("filter[platform]", "acc"))
        .and(query_param("filter[name]", "Tower"))
        .and(query_param("filterTextMatch", "startsWith"))
        .and(query_param("sort", "name asc,updatedAt desc"))
        .and(query_param("fields", "name,jobNumber"))
        .and(query_param("limit", "25"))
        .and(header("Region", "EMEA"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "limit": 25, "offset": 0, "totalResults": 1 },
            "results": [project_json("Tower A")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = GetProjectsOptions {
        status: Some(vec![ProjectStatus::Active, ProjectStatus::Pending]),
        platform: Some(vec![Platform::Acc]),
        name: Some("Tower".to_string()),
        filter_text_match: Some(FilterTextMatch::StartsWith),
        sort: Some(vec![ProjectSortBy::NameAsc, ProjectSortBy::UpdatedAtDesc]),
        fields: Some(vec![ProjectFields::Name, ProjectFields::JobNumber]),
        limit: Some(25),
        offset: Some(0),
        ..Default::default()
    };
    let page = client(&server, Some(Region::Emea))
        .projects()
        .get_projects(account(), &options)
        .await
        .unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name.as_deref(), Some("Tower A"));
    assert!(!page.has_more());

    // offset=0 is omitted and no User-Id was configured
    let requests = server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert!(url.query_pairs().all(|(k, _)| k != "offset"));
    assert!(!requests[0].headers.contains_key("user-id"));
}

#[tokio::test]
async fn get_project_with_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/construction/admin/v1/projects/{}", PROJECT)))
        .and(query_param("fields", "classification,memberCount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json("Bridge")))
        .expect(1)
        .mount(&server)
        .await;

    let fetched = client(&server, None)
        .projects()
        .get_project(
            project(),
            Some(vec![ProjectFields::Classification, ProjectFields::MemberCount]),
        )
        .await
        .unwrap();
    assert_eq!(fetched.name.as_deref(), Some("Bridge"));

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("region"));
}

#[tokio::test]
async fn create_project_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/construction/admin/v1/accounts/{}/projects",
            ACCOUNT
        )))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "name": "Bridge",
            "type": "Bridge",
            "classification": "sample"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(project_json("Bridge")))
        .expect(1)
        .mount(&server)
        .await;

    let mut payload = ProjectPayload::new("Bridge", "Bridge");
    payload.classification = Some(Classification::Sample);
    let created = client(&server, Some(Region::Us))
        .projects()
        .create_project(account(), &payload)
        .await
        .unwrap();
    assert_eq!(created.status, Some(ProjectStatus::Active));
}

#[tokio::test]
async fn assign_project_user_acts_as_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/construction/admin/v1/projects/{}/users", PROJECT)))
        .and(header("User-Id", "PER8KQPK2JRT"))
        .and(body_json(json!({
            "email": "jane@example.com",
            "products": [{ "key": "docs", "access": "member" }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "3a8d1b66-6a60-4a53-8ec6-2d5a0e8f6a01",
            "email": "jane@example.com",
            "status": "pending"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = ProjectUserPayload {
        email: Some("jane@example.com".to_string()),
        products: vec![ProjectUserProduct {
            key: Product::Docs,
            access: ProductAccessLevel::Member,
        }],
        ..Default::default()
    };
    let user = client(&server, None)
        .as_user("PER8KQPK2JRT")
        .project_users()
        .assign_project_user(project(), &payload)
        .await
        .unwrap();
    assert_eq!(user.email.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn remove_project_user_accepts_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!(
            "/construction/admin/v1/projects/{}/users/user-42",
            PROJECT
        )))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server, None)
        .project_users()
        .remove_project_user(project(), "user-42")
        .await
        .unwrap();
}

#[tokio::test]
async fn import_project_users_uses_colon_route() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/construction/admin/v1/projects/{}/users:import",
            PROJECT
        )))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({
            "jobId": "5c2a1d3e-0f4b-4a5c-8d6e-7f8091a2b3c4"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let job = client(&server, None)
        .project_users()
        .import_project_users(
            project(),
            &ProjectUsersImportPayload {
                users: vec![ProjectUserPayload {
                    email: Some("sam@example.com".to_string()),
                    ..Default::default()
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(job.job_id.to_string(), "5c2a1d3e-0f4b-4a5c-8d6e-7f8091a2b3c4");
}

#[tokio::test]
async fn search_users_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/hq/v1/accounts/{}/users/search", ACCOUNT)))
        .and(query_param("name", "Jane"))
        .and(query_param("company_name", "Acme"))
        .and(query_param("operator", "AND"))
        .and(query_param("partial", "true"))
        .and(query_param("sort", "name,email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "f3b1f0c2-7d1e-4b1a-9a63-1a2b3c4d5e6f", "email": "jane@acme.com" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let options = SearchUsersOptions {
        name: Some("Jane".to_string()),
        company_name: Some("Acme".to_string()),
        operator: Some(SearchOperator::And),
        partial: Some(true),
        sort: Some(vec!["name".to_string(), "email".to_string()]),
        ..Default::default()
    };
    let users = client(&server, None)
        .account_users()
        .search_users(account(), &options)
        .await
        .unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "jane@acme.com");
}

#[tokio::test]
async fn import_users_reports_partial_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/hq/v1/accounts/{}/users/import", ACCOUNT)))
        .and(body_json(json!([
            { "email": "ok@example.com", "company_id": COMPANY },
            { "email": "bad", "company_id": COMPANY }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": 1,
            "failure": 1,
            "success_items": [{ "id": "f3b1f0c2-7d1e-4b1a-9a63-1a2b3c4d5e6f", "email": "ok@example.com" }],
            "failure_items": [{ "item": { "email": "bad" }, "errors": [{ "message": "email is invalid" }] }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let company: Uuid = COMPANY.parse().unwrap();
    let result = client(&server, None)
        .account_users()
        .import_users(
            account(),
            &[
                AccountUserPayload::new("ok@example.com", company),
                AccountUserPayload::new("bad", company),
            ],
        )
        .await
        .unwrap();
    assert_eq!((result.success, result.failure), (1, 1));
}

#[tokio::test]
async fn get_users_paging() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/hq/v1/accounts/{}/users", ACCOUNT)))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "200"))
        .and(query_param("field", "name,email"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client(&server, None)
        .account_users()
        .get_users(
            account(),
            &ListOptions {
                limit: Some(100),
                offset: Some(200),
                field: Some(vec!["name".to_string(), "email".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn update_company_patches() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path(format!("/hq/v1/accounts/{}/companies/{}", ACCOUNT, COMPANY)))
        .and(body_json(json!({ "trade": "Concrete" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": COMPANY,
            "name": "Acme",
            "trade": "Concrete"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let patch = CompanyPatch {
        trade: Some(Trade::Concrete),
        ..Default::default()
    };
    let company = client(&server, None)
        .companies()
        .update_company(account(), COMPANY.parse().unwrap(), &patch)
        .await
        .unwrap();
    assert_eq!(company.trade, Trade::Concrete);
}

#[tokio::test]
async fn get_project_companies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/hq/v1/accounts/{}/projects/{}/companies",
            ACCOUNT, PROJECT
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": COMPANY, "name": "Acme", "trade": "Concrete" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let companies = client(&server, None)
        .companies()
        .get_project_companies(account(), project(), &ListOptions::default())
        .await
        .unwrap();
    assert_eq!(companies[0].name, "Acme");
}

#[tokio::test]
async fn create_business_units_puts_tree() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!(
            "/hq/v1/accounts/{}/business_units_structure",
            ACCOUNT
        )))
        .and(body_json(json!({
            "business_units": [{ "name": "North America" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "business_units": [
                { "id": "11111111-1111-1111-1111-111111111111", "name": "North America" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tree = client(&server, None)
        .business_units()
        .create_business_units(
            account(),
            &BusinessUnitsPayload {
                business_units: vec![BusinessUnitPayload {
                    name: "North America".to_string(),
                    ..Default::default()
                }],
            },
        )
        .await
        .unwrap();
    assert_eq!(tree.children(None).count(), 1);
}

#[tokio::test]
async fn error_body_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/construction/admin/v1/projects/{}", PROJECT)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "ERR_NOT_FOUND",
            "message": "Project not found"
        })))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .projects()
        .get_project(project(), None)
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(err.api_message(), Some("Project not found"));
}

#[tokio::test]
async fn error_without_json_keeps_raw_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/hq/v1/accounts/{}/business_units_structure", ACCOUNT)))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client(&server, None)
        .business_units()
        .get_business_units(account())
        .await
        .unwrap_err();
    match err {
        Error::Api { status, body, raw } => {
            assert_eq!(status.as_u16(), 502);
            assert!(body.is_none());
            assert_eq!(raw, "bad gateway");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn get_project_users_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/construction/admin/v1/projects/{}/users", PROJECT)))
        .and(query_param("filter[status]", "active"))
        .and(query_param("filter[companyId]", COMPANY))
        .and(query_param("sort", "email asc"))
        .and(query_param("offset", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pagination": { "limit": 50, "offset": 50, "totalResults": 51 },
            "results": [{ "id": "3a8d1b66-6a60-4a53-8ec6-2d5a0e8f6a01", "status": "active" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = GetProjectUsersOptions {
        status: Some(vec![ProjectUserStatus::Active]),
        company_id: Some(COMPANY.parse().unwrap()),
        sort: Some(vec![ProjectUserSortBy::EmailAsc]),
        offset: Some(50),
        ..Default::default()
    };
    let page = client(&server, None)
        .project_users()
        .get_project_users(project(), &options)
        .await
        .unwrap();
    assert_eq!(page.results.len(), 1);
    assert!(!page.has_more());
}

#[tokio::test]
async fn search_companies_encodes_trade() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/hq/v1/accounts/{}/companies/search", ACCOUNT)))
        .and(query_param("trade", "Painting & Coating"))
        .and(query_param("partial", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let options = SearchCompaniesOptions {
        trade: Some(Trade::PaintingAndCoating),
        partial: Some(false),
        ..Default::default()
    };
    let found = client(&server, None)
        .companies()
        .search_companies(account(), &options)
        .await
        .unwrap();
    assert!(found.is_empty());

    // `&` inside a value must not split the pair
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap();
    assert!(query.contains("trade=Painting%20%26%20Coating"));
}
