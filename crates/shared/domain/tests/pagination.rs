use changelog_domain::response::{PageRequest, PaginatedResponse, total_pages};
use proptest::prelude::*;

#[test]
fn second_short_page_is_the_last() {
    let page = PaginatedResponse::last_page((0..5).collect::<Vec<u32>>(), 2, 10).unwrap();
    assert_eq!(page.total, 15);
    assert_eq!(page.total_pages, 2);
    assert!(page.data.len() <= page.page_size as usize);
}

#[test]
fn paginated_response_uses_camel_case() {
    let page = PaginatedResponse::new(vec!["a"], 1, 10, 1).unwrap();
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["pageSize"], 10);
    assert_eq!(json["totalPages"], 1);
    assert!(json.get("message").is_none());
}

#[test]
fn deserialized_page_can_be_checked() {
    let raw = r#"{"success":true,"data":[1,2,3],"page":1,"pageSize":2,"total":3,"totalPages":2}"#;
    let page: PaginatedResponse<u8> = serde_json::from_str(raw).unwrap();
    assert!(page.check().is_err());
}

proptest! {
    #[test]
    fn total_pages_is_ceiling(total in 0_u64..100_000, page_size in 1_u32..500) {
        let pages = total_pages(total, page_size);
        prop_assert!(pages * u64::from(page_size) >= total);
        prop_assert!(pages == 0 || (pages - 1) * u64::from(page_size) < total);
    }

    #[test]
    fn every_slice_forms_a_valid_page(len in 0_usize..300, page in 1_u32..40, page_size in 1_u32..50) {
        let items: Vec<usize> = (0..len).collect();
        let request = PageRequest::new(page, page_size);
        let data = request.slice(&items).to_vec();

        let response = PaginatedResponse::for_request(data, request, len as u64).unwrap();
        prop_assert!(response.data.len() <= page_size as usize);
        prop_assert_eq!(response.total_pages, total_pages(len as u64, page_size));
        if response.is_last_page() && !response.data.is_empty() {
            prop_assert_eq!(
                response.total,
                u64::from(page - 1) * u64::from(page_size) + response.data.len() as u64
            );
        }
    }
}
