// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use afforest_model::prelude::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

// Nearest ancestor of CARGO_MANIFEST_DIR that contains a `data/` directory.
fn find_data_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("data");
        if cand.join("tree_info.json").is_file() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

#[test]
fn test_load_sample_catalog_from_workspace_data_folder() {
    let data = find_data_dir()
        .expect("Could not find a `data/` directory in any ancestor of CARGO_MANIFEST_DIR");

    let catalog = CatalogLoader::default()
        .from_paths(data.join("tree_info.json"), data.join("tree_idx.json"))
        .unwrap_or_else(|e| panic!("Failed to load sample catalog: {e}"));

    assert!(!catalog.is_empty(), "sample catalog has no species");
    for s in &catalog {
        assert!(s.cost() > 0, "{} has no cost", s.common_name());
        assert!(s.area() > 0, "{} has no area", s.common_name());
        assert_eq!(catalog.lookup(s.common_name()), Some(s.id()));
    }
}

#[test]
fn test_sample_index_covers_every_species() {
    let data = find_data_dir().expect("no data dir");
    let index: std::collections::HashMap<String, usize> =
        serde_json::from_str(&fs::read_to_string(data.join("tree_idx.json")).unwrap()).unwrap();
    let catalog = CatalogLoader::default()
        .from_path(data.join("tree_info.json"))
        .unwrap();
    assert_eq!(index.len(), catalog.len());
}

#[test]
fn test_load_from_temporary_files() {
    let dir = tempfile::tempdir().unwrap();
    let info_path = dir.path().join("tree_info.json");
    let idx_path = dir.path().join("tree_idx.json");

    let mut info = fs::File::create(&info_path).unwrap();
    write!(
        info,
        r#"[{{"plantSpecies":"Mangifera indica","commonName":"Mango","lifeForm":"Tree",
            "zoneI":6,"zoneII":6,"zoneIII":6,"zoneIV":6,"canopyDiameter":12,
            "utility":10,"cost":35,"area":25}}]"#
    )
    .unwrap();
    fs::write(&idx_path, r#"{"Mango":0}"#).unwrap();

    let catalog = CatalogLoader::new()
        .from_paths(&info_path, &idx_path)
        .unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.species()[0].utility(), 10.0);
}

#[test]
fn test_band_to_zone_selects_a_score_field() {
    let data = find_data_dir().expect("no data dir");
    let catalog = CatalogLoader::default()
        .from_path(data.join("tree_info.json"))
        .unwrap();
    let zone = AirQualityBand::from_index(320).zone();
    assert_eq!(zone, PriorityZone::ZoneI);
    let neem = catalog.get(catalog.lookup("Neem").unwrap()).unwrap();
    assert_eq!(neem.zone_score(zone), 9.0);
}
