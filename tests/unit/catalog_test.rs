use colorbrowser::catalog::ColorCatalog;
use colorbrowser::types::color::ColorEntry;
use colorbrowser::types::errors::CatalogError;

fn entry(id: &str, value: &str) -> ColorEntry {
    ColorEntry::new(id, value)
}

#[test]
fn test_load_succeeds() {
    let catalog = ColorCatalog::load().unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn test_from_entries_preserves_order() {
    let catalog = ColorCatalog::from_entries(vec![
        entry("RED_100", "#ffcdd2"),
        entry("RED_200", "#ef9a9a"),
        entry("BLUE_100", "#bbdefb"),
    ])
    .unwrap();
    let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["RED_100", "RED_200", "BLUE_100"]);
}

#[test]
fn test_empty_palette_rejected() {
    let result = ColorCatalog::from_entries(Vec::new());
    assert!(matches!(result, Err(CatalogError::EmptyPalette)));
}

#[test]
fn test_empty_id_rejected() {
    let result = ColorCatalog::from_entries(vec![entry("RED_100", "#ffcdd2"), entry("", "#fff")]);
    assert!(matches!(result, Err(CatalogError::EmptyId(1))));
}

#[test]
fn test_duplicate_id_rejected() {
    let result = ColorCatalog::from_entries(vec![
        entry("RED_100", "#ffcdd2"),
        entry("RED_100", "#ef9a9a"),
    ]);
    match result {
        Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "RED_100"),
        other => panic!("expected DuplicateId, got {:?}", other.err()),
    }
}

#[test]
fn test_malformed_value_rejected() {
    let result = ColorCatalog::from_entries(vec![entry("RED_100", "red")]);
    assert!(matches!(result, Err(CatalogError::MalformedValue { .. })));

    let result = ColorCatalog::from_entries(vec![entry("RED_100", "#12345")]);
    assert!(result.is_err());
}

#[test]
fn test_eight_digit_values_accepted() {
    let catalog = ColorCatalog::from_entries(vec![entry("BLACK_54", "#8a000000")]).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_get_by_id() {
    let catalog = ColorCatalog::load().unwrap();
    assert_eq!(catalog.get("RED_100").unwrap().value, "#ffcdd2");
    assert!(catalog.get("RED_1000").is_none());
}

#[test]
fn test_namespaced_label() {
    let e = entry("RED_400", "#ef5350");
    assert_eq!(e.namespaced(), "colors.RED_400");
}

#[test]
fn test_every_canonical_group_has_entries() {
    // The fixed palette gives every tab at least one color.
    use colorbrowser::browsers::tab_browser::CANONICAL_GROUPS;
    let catalog = ColorCatalog::load().unwrap();
    for name in CANONICAL_GROUPS {
        assert!(
            catalog.iter().any(|e| e.id.starts_with(name)),
            "no palette entry for group {}",
            name
        );
    }
}
