//! Loading catalogs from disk in both supported formats.

use catalog::{Catalog, CatalogError, Color, Product, Size};
use std::io::Write;

#[test]
fn test_load_line_format() {
    let mut file = tempfile::Builder::new().suffix(".dat").tempfile().unwrap();
    writeln!(file, "# name::color::size").unwrap();
    writeln!(file, "Apple::green::small").unwrap();
    writeln!(file, "Tree::green::large").unwrap();
    writeln!(file, "House::blue::large").unwrap();

    let catalog = Catalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog, Catalog::sample());
}

#[test]
fn test_load_json_format() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[{{"name": "Kite", "color": "red", "size": "medium"}},
            {{"name": "Barn", "color": "red", "size": "yuge"}}]"#
    )
    .unwrap();

    let catalog = Catalog::load_from_file(file.path()).unwrap();
    assert_eq!(
        catalog.products(),
        &[
            Product::new("Kite", Color::Red, Size::Medium),
            Product::new("Barn", Color::Red, Size::Yuge),
        ]
    );
}

#[test]
fn test_json_round_trip_of_sample() {
    let json = serde_json::to_string(&Catalog::sample()).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains(r#""color":"green""#));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_from_file(&dir.path().join("missing.dat")).unwrap_err();
    assert!(matches!(err, CatalogError::IoError(_)));
}

#[test]
fn test_load_bad_json() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"[{{"name": "Kite", "color": "purple", "size": "medium"}}]"#).unwrap();

    let err = Catalog::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::JsonError(_)));
}
