//! Parquet fixtures shaped like GraphRAG output tables

#![allow(dead_code)]

use polars::prelude::*;
use std::fs::File;
use std::path::Path;

pub fn write_parquet(path: &Path, frame: &mut DataFrame) {
    let mut file = File::create(path).unwrap();
    ParquetWriter::new(&mut file).finish(frame).unwrap();
}

fn floats(values: &[f64]) -> Series {
    Series::new("", values)
}

fn strings(values: &[&str]) -> Series {
    Series::new("", values)
}

pub fn communities_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("level", &[0i64, 0]),
        Series::new("id", &["c1", "c2"]),
        Series::new("title", &["Cat Memes", "Dog Memes"]),
        Series::new("summary", &["Cats doing things.", "Dogs doing things."]),
        Series::new(
            "keywords",
            &[strings(&["cat", "meme"]), strings(&["dog"])],
        ),
        Series::new("size", &[2i64, 1]),
        Series::new(
            "full_content_embedding",
            &[floats(&[0.5, 0.25]), floats(&[0.75, 1.0])],
        ),
    ])
    .unwrap()
}

pub fn entities_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id", &["e1", "e2", "e3"]),
        Series::new("title", &["Cat Meme", "Grumpy Cat", "Doge"]),
        Series::new("type", &["Concept", "Character", "Character"]),
        Series::new(
            "description",
            &["A meme about cats.", "A cat that looks grumpy.", "A shiba inu."],
        ),
        Series::new("community", &["c1", "c1", "c2"]),
        Series::new(
            "embedding",
            &[floats(&[0.1, 0.2]), floats(&[0.3, 0.4]), floats(&[0.5, 0.6])],
        ),
    ])
    .unwrap()
}

pub fn relationships_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new("id", &["r1", "r2"]),
        Series::new("source", &["e1", "e2"]),
        Series::new("target", &["e2", "e3"]),
        Series::new("type", &["RELATED", "RIVAL"]),
        Series::new("weight", &[1.5f64, 0.5]),
        Series::new("rank", &[3i64, 2]),
    ])
    .unwrap()
}

pub fn empty_relationships_frame() -> DataFrame {
    DataFrame::new(vec![
        Series::new_empty("source", &DataType::String),
        Series::new_empty("target", &DataType::String),
        Series::new_empty("type", &DataType::String),
        Series::new_empty("weight", &DataType::Float64),
    ])
    .unwrap()
}

/// Write the three standard tables into `dir`
pub fn write_fixture_tables(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    write_parquet(&dir.join("communities.parquet"), &mut communities_frame());
    write_parquet(&dir.join("entities.parquet"), &mut entities_frame());
    write_parquet(&dir.join("relationships.parquet"), &mut relationships_frame());
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
