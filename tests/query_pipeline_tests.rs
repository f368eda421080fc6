/// Query pipeline tests
///
/// Search, column filters, sorting and pagination through the service.
/// Run with: cargo test --test query_pipeline_tests

mod common;

use seaports::{FilterSpec, PageRequest, Pagination, Record, SortKey, TableState};

fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.id()).collect()
}

#[tokio::test]
async fn test_search_is_case_insensitive_over_search_fields() {
    let service = common::service();

    let page = service
        .list_page(Pagination::default(), None, &FilterSpec::search("ROTTER"))
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["NLRTM"]);

    // province
    let page = service
        .list_page(Pagination::default(), None, &FilterSpec::search("south holl"))
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["NLRTM"]);

    // continent
    let count = service.count(&FilterSpec::search("asia")).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_search_ignores_other_fields() {
    let service = common::service();

    // timezone is not searched
    let count = service.count(&FilterSpec::search("Europe/Berlin")).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_column_filters_are_combined() {
    let service = common::service();

    let filters = FilterSpec::new().with_column("timezone", "europe");
    assert_eq!(service.count(&filters).await.unwrap(), 3);

    let filters = filters.with_column("province", "ant");
    let page = service
        .list_page(Pagination::default(), None, &filters)
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["BEANR"]);
}

#[tokio::test]
async fn test_missing_field_never_matches_filter() {
    let service = common::service();

    // Rotterdam and Antwerp have no continent
    let filters = FilterSpec::new().with_column("continent", "e");
    let page = service
        .list_page(Pagination::default(), Some(&SortKey::asc("name")), &filters)
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["NZAKL", "DEHAM", "USNYC"]);
}

#[tokio::test]
async fn test_empty_filter_value_is_ignored() {
    let service = common::service();

    let filters = FilterSpec::new().with_column("country", "");
    assert_eq!(service.count(&filters).await.unwrap(), 6);
}

#[tokio::test]
async fn test_clearing_a_filter_restores_the_listing() {
    let service = common::service();
    let mut table = TableState::new(10);

    let original = service.query(&table.request()).await.unwrap();
    assert_eq!(
        ids(&original.records),
        vec!["NLRTM", "BEANR", "DEHAM", "SGSIN", "USNYC", "NZAKL"]
    );

    table.apply_column_filter("country", "new");
    let filtered = service.query(&table.request()).await.unwrap();
    assert_eq!(ids(&filtered.records), vec!["NZAKL"]);

    table.clear_column_filter("country");
    let restored = service.query(&table.request()).await.unwrap();
    assert_eq!(ids(&restored.records), ids(&original.records));
    assert_eq!(restored.total_count, original.total_count);

    let mut filters = FilterSpec::new();
    filters.set("province", "holl");
    assert_eq!(service.count(&filters).await.unwrap(), 1);
    filters.clear("province");
    let page = service
        .list_page(Pagination::default(), None, &filters)
        .await
        .unwrap();
    assert_eq!(ids(&page), ids(&original.records));
}

#[tokio::test]
async fn test_nested_path_filter() {
    let service = common::service();

    let filters = FilterSpec::new().with_column("coordinates.latitude", "51.");
    let page = service
        .list_page(Pagination::default(), Some(&SortKey::asc("id")), &filters)
        .await
        .unwrap();
    assert_eq!(ids(&page), vec!["BEANR", "NLRTM"]);
}

#[tokio::test]
async fn test_sort_by_nested_number() {
    let service = common::service();

    let page = service
        .list_page(
            Pagination::default(),
            Some(&SortKey::desc("coordinates.latitude")),
            &FilterSpec::new(),
        )
        .await
        .unwrap();
    assert_eq!(
        ids(&page),
        vec!["DEHAM", "NLRTM", "BEANR", "USNYC", "SGSIN", "NZAKL"]
    );
}

#[tokio::test]
async fn test_missing_sort_values_come_first_ascending() {
    let service = common::service();

    let page = service
        .list_page(
            Pagination::default(),
            Some(&SortKey::asc("continent")),
            &FilterSpec::new(),
        )
        .await
        .unwrap();
    // NLRTM and BEANR lack a continent; ties keep their document order
    assert_eq!(&ids(&page)[..2], &["NLRTM", "BEANR"]);
    assert_eq!(&ids(&page)[2..], &["SGSIN", "DEHAM", "USNYC", "NZAKL"]);
}

#[tokio::test]
async fn test_pages_partition_the_filtered_set() {
    let service = common::service();
    let sort = SortKey::asc("name");
    let filters = FilterSpec::new();

    let total = service.count(&filters).await.unwrap();
    let mut seen = Vec::new();
    for index in 0..total.div_ceil(4) {
        let page = service
            .list_page(Pagination::new(index, 4), Some(&sort), &filters)
            .await
            .unwrap();
        assert!(page.len() <= 4);
        seen.extend(page.into_iter().map(|record| record.id().to_string()));
    }

    assert_eq!(
        seen,
        vec!["BEANR", "NZAKL", "DEHAM", "USNYC", "NLRTM", "SGSIN"]
    );
}

#[tokio::test]
async fn test_page_past_the_end_is_empty() {
    let service = common::service();

    let page = service
        .list_page(Pagination::new(10, 10), None, &FilterSpec::new())
        .await
        .unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_query_returns_page_and_totals() {
    let service = common::service();

    let request = PageRequest::new(Pagination::new(1, 2))
        .with_sort(SortKey::asc("name"))
        .with_filters(FilterSpec::search("an"));
    let result = service.query(&request).await.unwrap();

    // Antwerp, Auckland, Germany and Netherlands match
    assert_eq!(result.total_count, 4);
    assert_eq!(result.page_count, 2);
    assert_eq!(ids(&result.records), vec!["DEHAM", "NLRTM"]);
    assert!(result.is_last_page());
}

#[tokio::test]
async fn test_distinct_values() {
    let service = common::service();

    let continents = service.list_distinct_values("continent").await.unwrap();
    assert_eq!(continents, vec!["Asia", "Europe", "North America", "Oceania"]);

    let unlocs = service.list_distinct_values("unlocs").await.unwrap();
    assert_eq!(unlocs.len(), 6);

    let nothing = service.list_distinct_values("berths").await.unwrap();
    assert!(nothing.is_empty());
}
