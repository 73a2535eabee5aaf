use super::*;
use std::collections::BTreeSet;

fn make_set(name: &str, theme: Option<&str>, pieces: u32) -> LegoSet {
    LegoSet {
        number: format!("{}-1", name.to_lowercase().replace(' ', "")),
        name: name.to_string(),
        year: None,
        theme: theme.map(str::to_string),
        subtheme: None,
        tags: None,
        pieces,
        minifigs: Vec::new(),
        dimensions: None,
        packaging_type: PackagingType::Box,
    }
}

fn with_tags(mut set: LegoSet, tags: &[&str]) -> LegoSet {
    set.tags = Some(tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>());
    set
}

fn with_packaging(mut set: LegoSet, packaging: PackagingType) -> LegoSet {
    set.packaging_type = packaging;
    set
}

fn sample() -> Vec<LegoSet> {
    vec![
        make_set("A", Some("Star Wars"), 500),
        make_set("B", Some("Star Wars"), 1200),
        make_set("C", Some("Duplo"), 30),
    ]
}

// ── count_with_tag ──────────────────────────────────────────────────────────

#[test]
fn test_count_with_tag() {
    let sets = vec![
        with_tags(make_set("A", None, 10), &["Microscale", "Space"]),
        with_tags(make_set("B", None, 10), &["Space"]),
        make_set("C", None, 10),
        with_tags(make_set("D", None, 10), &["Microscale"]),
    ];
    assert_eq!(count_with_tag(&sets, "Microscale"), 2);
    assert_eq!(count_with_tag(&sets, "Space"), 2);
    assert_eq!(count_with_tag(&sets, "Castle"), 0);
}

#[test]
fn test_count_with_tag_is_exact() {
    let sets = vec![with_tags(make_set("A", None, 10), &["Microscale"])];
    assert_eq!(count_with_tag(&sets, "microscale"), 0);
    assert_eq!(count_with_tag(&sets, "Micro"), 0);
}

#[test]
fn test_count_with_tag_absent_and_empty_tags() {
    let sets = vec![make_set("A", None, 10), with_tags(make_set("B", None, 10), &[])];
    assert_eq!(count_with_tag(&sets, "Microscale"), 0);
}

// ── names ───────────────────────────────────────────────────────────────────

#[test]
fn test_names_sorted() {
    let sets = vec![
        make_set("Millennium Falcon", None, 7541),
        make_set("AT-AT", None, 1267),
        make_set("Death Star", None, 4016),
        make_set("AT-AT", None, 0),
    ];
    assert_eq!(
        names_sorted(&sets),
        vec!["AT-AT", "AT-AT", "Death Star", "Millennium Falcon"]
    );
}

#[test]
fn test_names_sorted_empty() {
    assert!(names_sorted(&[]).is_empty());
}

#[test]
fn test_names_under_piece_limit() {
    assert_eq!(names_under_piece_limit(&sample(), 40), vec!["C"]);
    assert_eq!(names_under_piece_limit(&sample(), 1200), vec!["A", "C"]);
    assert_eq!(names_under_piece_limit(&sample(), 1201), vec!["A", "B", "C"]);
}

#[test]
fn test_names_under_piece_limit_skips_unknown_count() {
    let sets = vec![
        make_set("Unknown", None, 0),
        make_set("Keychain", None, 8),
        make_set("Magnet", None, 3),
    ];
    assert_eq!(names_under_piece_limit(&sets, 40), vec!["Keychain", "Magnet"]);
}

#[test]
fn test_names_under_piece_limit_is_exclusive() {
    let sets = vec![make_set("Forty", None, 40)];
    assert!(names_under_piece_limit(&sets, 40).is_empty());
    assert!(names_under_piece_limit(&sets, 0).is_empty());
}

// ── packaging_types ─────────────────────────────────────────────────────────

#[test]
fn test_packaging_types_first_seen_order() {
    let sets = vec![
        with_packaging(make_set("A", None, 1), PackagingType::Polybag),
        with_packaging(make_set("B", None, 1), PackagingType::Box),
        with_packaging(make_set("C", None, 1), PackagingType::Polybag),
        with_packaging(make_set("D", None, 1), PackagingType::Other("Tin".into())),
        with_packaging(make_set("E", None, 1), PackagingType::Box),
        with_packaging(make_set("F", None, 1), PackagingType::Other("Tin".into())),
    ];
    assert_eq!(
        packaging_types(&sets),
        vec![
            &PackagingType::Polybag,
            &PackagingType::Box,
            &PackagingType::Other("Tin".into()),
        ]
    );
}

// ── sum_pieces ──────────────────────────────────────────────────────────────

#[test]
fn test_sum_pieces() {
    assert_eq!(sum_pieces(&sample(), "Duplo"), 30);
    assert_eq!(sum_pieces(&sample(), "Star Wars"), 1700);
}

#[test]
fn test_sum_pieces_no_match_is_zero() {
    assert_eq!(sum_pieces(&sample(), "Technic"), 0);
    assert_eq!(sum_pieces(&sample(), "duplo"), 0);
}

#[test]
fn test_sum_pieces_skips_missing_theme() {
    let mut sets = sample();
    sets.push(make_set("Loose", None, 999));
    assert_eq!(sum_pieces(&sets, "Duplo"), 30);
}

#[test]
fn test_sum_pieces_does_not_overflow_u32() {
    let sets = vec![
        make_set("Big 1", Some("Huge"), u32::MAX),
        make_set("Big 2", Some("Huge"), u32::MAX),
    ];
    assert_eq!(sum_pieces(&sets, "Huge"), 2 * u64::from(u32::MAX));
}

// ── largest_in_theme ────────────────────────────────────────────────────────

#[test]
fn test_largest_in_theme() {
    let sets = sample();
    let largest = largest_in_theme(&sets, "Star Wars").unwrap();
    assert_eq!(largest.name, "B");
    assert_eq!(largest_in_theme(&sets, "Duplo").unwrap().name, "C");
}

#[test]
fn test_largest_in_theme_tie_keeps_first() {
    let sets = vec![
        make_set("First", Some("Castle"), 800),
        make_set("Small", Some("Castle"), 100),
        make_set("Second", Some("Castle"), 800),
    ];
    assert_eq!(largest_in_theme(&sets, "Castle").unwrap().name, "First");
}

#[test]
fn test_largest_in_theme_not_found() {
    let mut sets = sample();
    sets.push(make_set("Loose", None, 5000));
    assert_eq!(
        largest_in_theme(&sets, "Technic"),
        Err(QueryError::NoSetsInTheme("Technic".to_string()))
    );
    assert!(largest_in_theme(&[], "Star Wars").is_err());
}

// ── supplementary queries ───────────────────────────────────────────────────

#[test]
fn test_pieces_by_theme() {
    let mut sets = sample();
    sets.push(make_set("Loose", None, 77));
    let totals = pieces_by_theme(&sets);
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["Duplo"], 30);
    assert_eq!(totals["Star Wars"], 1700);
    let order: Vec<&str> = totals.keys().copied().collect();
    assert_eq!(order, vec!["Duplo", "Star Wars"]);
}

#[test]
fn test_themes_first_seen_order() {
    let mut sets = sample();
    sets.insert(0, make_set("Loose", None, 1));
    sets.push(make_set("D", Some("Star Wars"), 1));
    assert_eq!(themes(&sets), vec!["Star Wars", "Duplo"]);
}

#[test]
fn test_find_by_number() {
    let sets = sample();
    assert_eq!(find_by_number(&sets, "b-1").map(|s| s.name.as_str()), Some("B"));
    assert!(find_by_number(&sets, "zz-1").is_none());
}

// ── LegoSetRepository ───────────────────────────────────────────────────────

#[test]
fn test_repository_delegates_to_queries() {
    let repo = LegoSetRepository::from_sets(sample());
    assert_eq!(repo.len(), 3);
    assert!(!repo.is_empty());
    assert_eq!(repo.source(), "memory");
    assert_eq!(repo.sum_pieces("Duplo"), 30);
    assert_eq!(repo.names_under_piece_limit(40), vec!["C"]);
    assert_eq!(repo.largest_in_theme("Star Wars").unwrap().name, "B");
    assert_eq!(repo.names_sorted(), vec!["A", "B", "C"]);
}

#[test]
fn test_bundled_catalog_loads() {
    let repo = LegoSetRepository::bundled().unwrap();
    assert!(!repo.is_empty());
    assert_eq!(repo.source(), BUNDLED_SOURCE);
    assert!(repo.largest_in_theme("Star Wars").is_ok());
    assert!(repo.count_with_tag("Microscale") > 0);
}
