use changelog_kernel::domain::changelog::{ChangelogStatus, CreateChangelogEntryRequest, UpdateChangelogEntryRequest};
use changelog_kernel::domain::product::{CreateProductRequest, Product, UpdateProductRequest};
use changelog_kernel::domain::response::PaginatedResponse;
use changelog_kernel::validation::{SchemaValidationError, Validate, decode, decode_value};
use serde_json::json;

fn product_json() -> serde_json::Value {
    json!({
        "id": "p1",
        "slug": "acme-cloud",
        "name": "Acme Cloud",
        "description": null,
        "iconUrl": "https://cdn.example.com/acme.png",
        "faIcon": null,
        "githubInstallationId": null,
        "createdAt": "2026-01-05T09:00:00Z",
        "updatedAt": "2026-01-05T09:00:00Z",
    })
}

#[test]
fn valid_product_decodes() {
    let product: Product = decode_value(product_json()).unwrap();
    assert_eq!(product.slug, "acme-cloud");
    assert!(product.repositories().is_empty());
}

#[test]
fn unknown_field_is_malformed() {
    let mut value = product_json();
    value["owner"] = json!("someone");
    let err = decode_value::<Product>(value).unwrap_err();
    assert!(matches!(err, SchemaValidationError::Malformed { .. }));
}

#[test]
fn repository_must_belong_to_product() {
    let mut value = product_json();
    value["repositories"] = json!([{
        "id": "r1",
        "productId": "other",
        "fullName": "acme/cloud",
        "githubRepoId": 7,
        "createdAt": "2026-01-05T09:00:00Z",
    }]);
    let err = decode_value::<Product>(value).unwrap_err();
    assert_eq!(err.field_path(), Some("repositories[0].productId"));
}

#[test]
fn create_product_rules() {
    let request = CreateProductRequest {
        name: "Acme".to_owned(),
        slug: Some("Acme_Cloud".to_owned()),
        description: None,
        icon_url: None,
        fa_icon: None,
        github_installation_id: None,
    };
    assert_eq!(request.validate().unwrap_err().field_path(), Some("slug"));

    let request = CreateProductRequest { slug: None, icon_url: Some("ftp://icon".to_owned()), ..request };
    assert_eq!(request.validate().unwrap_err().field_path(), Some("iconUrl"));

    let request = CreateProductRequest { icon_url: None, github_installation_id: Some(0), ..request };
    assert_eq!(request.validate().unwrap_err().field_path(), Some("githubInstallationId"));
}

#[test]
fn icon_url_must_parse_as_a_url() {
    for icon in ["http://", "https://not a url", "http://\0"] {
        let json = json!({ "name": "Acme", "iconUrl": icon }).to_string();
        let err = decode::<CreateProductRequest>(&json).unwrap_err();
        assert_eq!(err.field_path(), Some("iconUrl"), "{icon:?} should be rejected");
    }

    let json = json!({ "name": "Acme", "iconUrl": "https://cdn.example.com/acme.png" }).to_string();
    let request = decode::<CreateProductRequest>(&json).unwrap();
    assert_eq!(request.icon_url.as_deref(), Some("https://cdn.example.com/acme.png"));
}

#[test]
fn update_rules_apply_to_present_values_only() {
    let cleared = decode::<UpdateProductRequest>(r#"{"iconUrl":null}"#).unwrap();
    assert_eq!(cleared.icon_url, Some(None));

    let err = decode::<UpdateProductRequest>(r#"{"iconUrl":"not-a-url"}"#).unwrap_err();
    assert_eq!(err.field_path(), Some("iconUrl"));

    let err = decode::<UpdateChangelogEntryRequest>(r#"{"version":" "}"#).unwrap_err();
    assert_eq!(err.field_path(), Some("version"));
}

#[test]
fn empty_updates_are_rejected() {
    assert_eq!(UpdateProductRequest::default().validate().unwrap_err().field_path(), Some("body"));
    assert_eq!(UpdateChangelogEntryRequest::default().validate().unwrap_err().field_path(), Some("body"));

    let rename = UpdateProductRequest { name: Some("Acme 2".to_owned()), ..Default::default() };
    assert!(rename.validate().is_ok());
}

#[test]
fn blank_title_is_named() {
    let json = r#"{"productId":"p1","title":"  ","content":"Body","version":"1.0.0","publish":true}"#;
    let err = decode::<CreateChangelogEntryRequest>(json).unwrap_err();
    assert_eq!(err.field_path(), Some("title"));
    assert_eq!(err.to_string(), "Invalid field 'title': must not be blank");
}

#[test]
fn inconsistent_entry_is_rejected() {
    let json = r#"{
        "id": "e1",
        "productId": "p1",
        "title": "Dark mode",
        "content": "Added a dark theme.",
        "version": null,
        "status": "PUBLISHED",
        "publishedAt": null,
        "createdBy": "user1",
        "createdAt": "2026-01-05T09:00:00Z",
        "updatedAt": "2026-01-05T09:00:00Z"
    }"#;
    let err = decode::<changelog_kernel::domain::changelog::ChangelogEntry>(json).unwrap_err();
    assert_eq!(err.field_path(), Some("publishedAt"));

    let draft = json.replace("PUBLISHED", "DRAFT");
    let entry = decode::<changelog_kernel::domain::changelog::ChangelogEntry>(&draft).unwrap();
    assert_eq!(entry.status, ChangelogStatus::Draft);
}

#[test]
fn paginated_response_metadata_is_checked() {
    let json = r#"{"success":true,"data":[1,2,3,4,5],"page":2,"pageSize":10,"total":15,"totalPages":2}"#;
    let page = decode::<PaginatedResponse<u32>>(json).unwrap();
    assert!(page.is_last_page());

    let lying = json.replace(r#""totalPages":2"#, r#""totalPages":3"#);
    assert!(matches!(
        decode::<PaginatedResponse<u32>>(&lying),
        Err(SchemaValidationError::Invariant { .. })
    ));
}
