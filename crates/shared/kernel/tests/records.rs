use changelog_kernel::domain::auth::User;
use changelog_kernel::domain::changelog::{ChangelogStatus, CreateChangelogEntryRequest};
use changelog_kernel::domain::product::CreateProductRequest;
use changelog_kernel::domain::role::Role;
use changelog_kernel::records::{new_changelog_entry, new_product};
use changelog_kernel::validation::Validate;
use chrono::{DateTime, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 2, 14, 0, 0).unwrap()
}

fn product_request(name: &str, slug: Option<&str>) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_owned(),
        slug: slug.map(str::to_owned),
        description: Some("Hosted platform".to_owned()),
        icon_url: None,
        fa_icon: Some("cloud".to_owned()),
        github_installation_id: Some(9001),
    }
}

#[test]
fn product_slug_is_derived_from_name() {
    let product = new_product(product_request("Acme Cloud Platform", None), now()).unwrap();
    assert_eq!(product.slug, "acme-cloud-platform");
    assert_eq!(product.id.len(), 12);
    assert_eq!(product.created_at, product.updated_at);
    assert!(product.is_source_linked());
    assert!(product.validate().is_ok());
}

#[test]
fn explicit_slug_wins() {
    let product = new_product(product_request("Acme", Some("acme-v2")), now()).unwrap();
    assert_eq!(product.slug, "acme-v2");
}

#[test]
fn name_without_slug_material_is_rejected() {
    let err = new_product(product_request("???", None), now()).unwrap_err();
    assert_eq!(err.field_path(), Some("slug"));
}

#[test]
fn entry_is_attributed_to_author() {
    let author = User {
        id: "user7".to_owned(),
        auth_id: "idp|7".to_owned(),
        email: "author@example.com".to_owned(),
        name: None,
        picture: None,
        role: Role::Editor,
        created_at: now(),
        updated_at: now(),
    };
    let request = CreateChangelogEntryRequest {
        product_id: "p1".to_owned(),
        title: "Webhooks".to_owned(),
        content: "Outgoing webhooks for releases.".to_owned(),
        version: Some("2.0.0".to_owned()),
        publish: true,
    };

    let entry = new_changelog_entry(request, &author, now()).unwrap();
    assert_eq!(entry.created_by, "user7");
    assert_eq!(entry.status, ChangelogStatus::Published);
    assert_eq!(entry.published_at, Some(now()));
    assert!(entry.validate().is_ok());
}
