#[path = "../common/mod.rs"]
mod common;

use common::*;
use graphexport::conversion::config::{DEFAULT_COMMUNITY_FIELDS, DEFAULT_RELATIONSHIP_FIELDS};
use graphexport::parser::projection::{effective_columns, project};
use graphexport::{TableKind, TableSource};
use tempfile::tempdir;

#[test]
fn test_projection_keeps_row_order() {
    let tmp = tempdir().unwrap();
    write_fixture_tables(tmp.path());

    let source = TableSource::new(TableKind::Relationships, tmp.path().join("relationships.parquet"));
    let frame = source.read().unwrap();
    let projection = project(&frame, DEFAULT_RELATIONSHIP_FIELDS).unwrap();

    assert_eq!(projection.rows, 2);
    assert_eq!(projection.kept, DEFAULT_RELATIONSHIP_FIELDS);
    assert_eq!(projection.dropped, vec!["id", "rank"]);

    let sources: Vec<String> = projection
        .frame
        .column("source")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap().to_string())
        .collect();
    assert_eq!(sources, vec!["e1", "e2"]);
}

#[test]
fn test_community_embeddings_are_not_kept() {
    let frame = communities_frame();
    let projection = project(&frame, DEFAULT_COMMUNITY_FIELDS).unwrap();
    assert_eq!(
        projection.kept,
        vec!["id", "title", "summary", "keywords", "size"]
    );
    assert_eq!(projection.dropped, vec!["level", "full_content_embedding"]);
}

#[test]
fn test_effective_columns_ignores_unknown_names() {
    let actual = ["title", "id"];
    assert_eq!(
        effective_columns(&["id", "rank", "title"], &actual),
        vec!["id", "title"]
    );
}
