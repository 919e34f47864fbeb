//! End-to-end tests for the harvest pipeline against a mock portal.
//!
//! The harvester uses blocking HTTP, so every harvest runs inside
//! `spawn_blocking` while wiremock serves the portal endpoints.

use nubbe_harvester::{
    export_csv, harvest_catalog, write_csv, CompoundRecord, ExtractionSchema, HarvestError,
    Portal,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INDEX_TWO_IDS: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<molecules><id>101</id><id>102</id></molecules>";

const DETAIL_101: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<molecule>\
  <cod>NB-0001</cod>\
  <nome>Velutin</nome>\
  <classe>flavonoid</classe>\
  <familia>Fabaceae</familia>\
  <genero>Dalbergia</genero>\
  <especie>miscolobium</especie>\
  <which>1</which>\
  <which>9</which>\
  <origem>1</origem>\
  <compilado>J. Nat. Prod. 2001</compilado>\
</molecule>";

const DETAIL_102: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
<molecule><cod>NB-0002</cod></molecule>";

/// Mount the index response on the mock portal.
async fn mount_index(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/do/Query"))
        .and(body_string_contains("service=17"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount one compound's detail response on the mock portal.
async fn mount_detail(server: &MockServer, id: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/do/Query"))
        .and(query_param("service", "21"))
        .and(query_param("id", id.to_string()))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Run the blocking harvest against the mock portal.
async fn harvest_from(server: &MockServer) -> Result<Vec<CompoundRecord>, HarvestError> {
    let base_url = server.uri();
    tokio::task::spawn_blocking(move || {
        let portal = Portal::with_base_url(base_url)?;
        harvest_catalog(&portal, &ExtractionSchema::new(), |_, _| {})
    })
    .await
    .expect("harvest task panicked")
}

#[tokio::test]
async fn test_full_harvest_produces_ordered_uniform_records() {
    let server = MockServer::start().await;
    mount_index(&server, INDEX_TWO_IDS).await;
    mount_detail(&server, 101, ResponseTemplate::new(200).set_body_string(DETAIL_101)).await;
    mount_detail(&server, 102, ResponseTemplate::new(200).set_body_string(DETAIL_102)).await;

    let catalog = harvest_from(&server).await.expect("harvest should succeed");
    assert_eq!(catalog.len(), 2);

    let first = &catalog[0];
    assert_eq!(first.get("NuBBE"), Some("NB-0001"));
    assert_eq!(first.get("Common Name"), Some("Velutin"));
    assert_eq!(first.get("Species"), Some("Fabaceae Dalbergia miscolobium"));
    assert_eq!(
        first.get("Biological Properties"),
        Some("Anticancer, Cytotoxic")
    );
    assert_eq!(first.get("Source Type"), Some("Isolation"));
    assert_eq!(first.get("References"), Some("J. Nat. Prod. 2001"));

    // The sparse second record carries the identical column sequence,
    // with empty strings for every absent tag.
    let second = &catalog[1];
    assert_eq!(second.get("NuBBE"), Some("NB-0002"));
    assert_eq!(second.get("Species"), Some(""));
    assert_eq!(second.get("Biological Properties"), Some(""));
    let first_columns: Vec<_> = first.columns().collect();
    let second_columns: Vec<_> = second.columns().collect();
    assert_eq!(first_columns, second_columns);
}

#[tokio::test]
async fn test_harvest_and_export_round_trip() {
    let server = MockServer::start().await;
    mount_index(&server, INDEX_TWO_IDS).await;
    mount_detail(&server, 101, ResponseTemplate::new(200).set_body_string(DETAIL_101)).await;
    mount_detail(&server, 102, ResponseTemplate::new(200).set_body_string(DETAIL_102)).await;

    let catalog = harvest_from(&server).await.expect("harvest should succeed");

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.csv");
    export_csv(&catalog, &path).expect("export should succeed");

    let mut reader = csv::Reader::from_path(&path).expect("readable CSV");
    let header: Vec<String> = reader
        .headers()
        .expect("header row")
        .iter()
        .map(String::from)
        .collect();
    let expected_header: Vec<String> = catalog[0].columns().map(String::from).collect();
    assert_eq!(header, expected_header);

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|row| row.expect("row").iter().map(String::from).collect())
        .collect();
    assert_eq!(rows.len(), catalog.len());
    for (row, record) in rows.iter().zip(&catalog) {
        let values: Vec<String> = record.values().map(String::from).collect();
        assert_eq!(*row, values);
    }
}

#[tokio::test]
async fn test_progress_reported_before_each_fetch() {
    let server = MockServer::start().await;
    mount_index(&server, INDEX_TWO_IDS).await;
    mount_detail(&server, 101, ResponseTemplate::new(200).set_body_string(DETAIL_101)).await;
    mount_detail(&server, 102, ResponseTemplate::new(200).set_body_string(DETAIL_102)).await;

    let base_url = server.uri();
    let ticks = tokio::task::spawn_blocking(move || {
        let portal = Portal::with_base_url(base_url)?;
        let mut ticks = Vec::new();
        harvest_catalog(&portal, &ExtractionSchema::new(), |current, total| {
            ticks.push((current, total));
        })?;
        Ok::<_, HarvestError>(ticks)
    })
    .await
    .expect("harvest task panicked")
    .expect("harvest should succeed");

    assert_eq!(ticks, vec![(0, 2), (1, 2)]);
}

#[tokio::test]
async fn test_empty_index_aborts_before_export() {
    let server = MockServer::start().await;
    mount_index(&server, "<molecules/>").await;

    let err = harvest_from(&server).await.expect_err("harvest should fail");
    assert!(matches!(err, HarvestError::EmptyCatalog));
}

#[tokio::test]
async fn test_non_integer_id_aborts_the_run() {
    let server = MockServer::start().await;
    mount_index(&server, "<molecules><id>abc</id></molecules>").await;

    let err = harvest_from(&server).await.expect_err("harvest should fail");
    match err {
        HarvestError::InvalidId { text, .. } => assert_eq!(text, "abc"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_failed_detail_fetch_names_the_compound() {
    let server = MockServer::start().await;
    mount_index(&server, INDEX_TWO_IDS).await;
    mount_detail(&server, 101, ResponseTemplate::new(200).set_body_string(DETAIL_101)).await;
    mount_detail(&server, 102, ResponseTemplate::new(404)).await;

    let err = harvest_from(&server).await.expect_err("harvest should fail");
    match err {
        HarvestError::DetailDownload { id, .. } => assert_eq!(id, 102),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unresolved_code_aborts_with_compound_context() {
    let server = MockServer::start().await;
    mount_index(&server, "<molecules><id>101</id></molecules>").await;
    let detail = "<molecule><cod>NB-0001</cod><which>99</which></molecule>";
    mount_detail(&server, 101, ResponseTemplate::new(200).set_body_string(detail)).await;

    let err = harvest_from(&server).await.expect_err("harvest should fail");
    match err {
        HarvestError::Extraction { id, source } => {
            assert_eq!(id, 101);
            assert!(matches!(*source, HarvestError::UnresolvedCode { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_index_server_error_aborts_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/do/Query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = harvest_from(&server).await.expect_err("harvest should fail");
    assert!(matches!(err, HarvestError::IndexDownload { .. }));
}

#[test]
fn test_write_csv_empty_catalog_is_an_error() {
    let err = write_csv(&[], Vec::new()).expect_err("empty export should fail");
    assert!(matches!(err, HarvestError::EmptyCatalog));
}
