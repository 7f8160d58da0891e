use changelog_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: String,
    pub icon_url: Option<String>,
    pub github_installation_id: Option<i64>,
}

#[api_model(rename_all = "SCREAMING_SNAKE_CASE")]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Draft,
    Published,
}

#[api_model(deny_unknown_fields = false)]
pub struct Lenient {
    pub page_size: u32,
}

fn main() {
    let product = ProductSummary { id: "p1".to_owned(), icon_url: None, github_installation_id: Some(7) };
    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["iconUrl"], serde_json::Value::Null);
    assert_eq!(json["githubInstallationId"], 7);

    let strict = serde_json::from_str::<ProductSummary>(
        r#"{"id":"p1","iconUrl":null,"githubInstallationId":null,"extra":1}"#,
    );
    assert!(strict.is_err());

    assert_eq!(serde_json::to_string(&Status::Published).unwrap(), "\"PUBLISHED\"");

    let lenient: Lenient = serde_json::from_str(r#"{"pageSize":5,"extra":true}"#).unwrap();
    assert_eq!(lenient.page_size, 5);
}
