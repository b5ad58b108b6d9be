//! Tests for file-backed datasets loaded through the catalogue.

use netlab_core::{
    CatalogueErrorCode, DatasetErrorCode, GraphCatalogue, ModelParams, Position,
};
use netlab_test_support::{
    files::{DatasetDir, POWER_GRID_GML, TWO_COMPONENT_EDGE_LIST, WATER_NETWORK},
    tracing::capture,
};
use rstest::{fixture, rstest};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn dataset_dir() -> DatasetDir {
    DatasetDir::new().expect("temporary directory must be created")
}

fn catalogue_for(dir: &DatasetDir) -> GraphCatalogue {
    GraphCatalogue::builder().with_dataset_dir(dir.path()).build()
}

#[rstest]
#[case::gnutella("p2p_gnuetella08", "p2p-Gnutella08.txt")]
#[case::collaboration("ca_grqc", "ca-GrQc.txt")]
#[case::road("roadnet_ca", "road-california.txt")]
fn edge_lists_keep_largest_component(
    dataset_dir: DatasetDir,
    #[case] key: &str,
    #[case] file: &str,
) -> TestResult {
    dataset_dir.write(file, TWO_COMPONENT_EDGE_LIST)?;
    let graph = catalogue_for(&dataset_dir)
        .load(key, &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert!(graph.is_connected());
    assert_eq!(graph.label(0), Some("10"));
    Ok(())
}

#[rstest]
fn as_733_drops_source_labels(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("as19971108.txt", TWO_COMPONENT_EDGE_LIST)?;
    let graph = catalogue_for(&dataset_dir)
        .load("as_733", &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.label(0), None);
    Ok(())
}

#[rstest]
fn github_uses_comma_delimiter(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("github.csv", "id_1,id_2\n0,1\n1,2\n5,6\n")?;
    let graph = catalogue_for(&dataset_dir)
        .load("gitub", &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    Ok(())
}

#[rstest]
fn water_network_keeps_junction_triangle(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("ky2.txt", WATER_NETWORK)?;
    let graph = catalogue_for(&dataset_dir)
        .load("water", &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.label(0), None);
    assert_eq!(graph.position(2), Some(Position { x: 0.5, y: 0.8 }));
    Ok(())
}

#[rstest]
fn electrical_reads_gml_by_id(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("power.gml", POWER_GRID_GML)?;
    let graph = catalogue_for(&dataset_dir)
        .load("electrical", &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.canonical_edges(), vec![(0, 1), (1, 2)]);
    assert_eq!(graph.label(2), Some("2"));
    Ok(())
}

#[rstest]
fn karate_has_34_members_and_78_ties(dataset_dir: DatasetDir) -> TestResult {
    let graph = catalogue_for(&dataset_dir)
        .load("karate", &ModelParams::default())?
        .ok_or("dataset must be registered")?;
    assert_eq!(graph.node_count(), 34);
    assert_eq!(graph.edge_count(), 78);
    Ok(())
}

#[rstest]
fn empty_file_is_reported(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("dblp.txt", "# nothing here\n")?;
    let err = catalogue_for(&dataset_dir)
        .load("dblp", &ModelParams::default())
        .expect_err("an empty graph has no component");
    assert_eq!(err.dataset_code(), Some(DatasetErrorCode::EmptyGraph));
    Ok(())
}

#[rstest]
fn malformed_water_row_reports_line(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("ky2.txt", &format!("{WATER_NETWORK}J-4\t1.0\n"))?;
    let err = catalogue_for(&dataset_dir)
        .load("water", &ModelParams::default())
        .expect_err("two-field rows are malformed");
    assert_eq!(err.code(), CatalogueErrorCode::DatasetFailure);
    assert_eq!(err.dataset_code(), Some(DatasetErrorCode::MalformedRow));
    assert!(err.to_string().contains("ky2.txt:9"), "{err}");
    Ok(())
}

#[rstest]
fn dataset_span_records_component_size(dataset_dir: DatasetDir) -> TestResult {
    dataset_dir.write("wiki-Vote.txt", TWO_COMPONENT_EDGE_LIST)?;
    let catalogue = catalogue_for(&dataset_dir);
    let (result, layer) = capture(|| catalogue.load("wiki_vote", &ModelParams::default()));
    result?.ok_or("dataset must be registered")?;

    let span = layer.span("datasets.load").ok_or("dataset span must exist")?;
    assert_eq!(span.field("dataset"), Some("wiki_vote"));
    assert_eq!(span.field("nodes"), Some("4"));
    let loaded = layer
        .events()
        .into_iter()
        .find(|event| event.message() == Some("dataset loaded"))
        .ok_or("load event must exist")?;
    assert_eq!(loaded.field("raw_nodes"), Some("6"));
    Ok(())
}
