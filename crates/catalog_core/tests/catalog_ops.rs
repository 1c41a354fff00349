use catalog_core::{
    Catalog, Category, FixedYear, ListingLine, NullRecordError, Record, EMPTY_CATALOG_MESSAGE,
};

fn book(title: &str, year: i32) -> Record {
    Record::new_at(title, "Author", year, Category::Other, 2024).unwrap()
}

fn descriptions(catalog: &Catalog<FixedYear>) -> Vec<String> {
    catalog
        .list_all()
        .map(|line| match line {
            ListingLine::Entry { description, .. } => description,
            ListingLine::Empty => panic!("unexpected empty marker"),
        })
        .collect()
}

#[test]
fn fresh_catalog_lists_empty_marker() {
    let catalog = Catalog::with_clock(FixedYear(2024));
    let lines: Vec<ListingLine> = catalog.list_all().collect();

    assert_eq!(lines, vec![ListingLine::Empty]);
    assert!(lines[0].is_empty_marker());
    assert_eq!(lines[0].to_string(), EMPTY_CATALOG_MESSAGE);
}

#[test]
fn listing_preserves_insertion_order_and_duplicates() {
    let mut catalog = Catalog::with_clock(FixedYear(2024));
    let titles = ["Zeta", "Alpha", "Zeta", "Mid"];
    for (index, title) in titles.iter().enumerate() {
        catalog.add(book(title, 2000 + index as i32)).unwrap();
    }

    let listed = descriptions(&catalog);
    assert_eq!(listed.len(), titles.len());
    for (index, (description, title)) in listed.iter().zip(titles).enumerate() {
        assert!(description.starts_with(&format!("Title: {title}\n")));
        assert!(description.contains(&format!("Age: {} years", 24 - index as i32)));
    }

    let positions: Vec<usize> = catalog
        .list_all()
        .filter_map(|line| match line {
            ListingLine::Entry { position, .. } => Some(position),
            ListingLine::Empty => None,
        })
        .collect();
    assert_eq!(positions, vec![1, 2, 3, 4]);
}

#[test]
fn listing_is_restartable_and_tracks_current_state() {
    let mut catalog = Catalog::with_clock(FixedYear(2024));
    catalog.add(book("First", 1990)).unwrap();
    assert_eq!(catalog.list_all().count(), 1);
    assert_eq!(catalog.list_all().count(), 1);

    catalog.add(book("Second", 1991)).unwrap();
    assert_eq!(catalog.list_all().count(), 2);
}

#[test]
fn absent_record_is_rejected_and_entries_unchanged() {
    let mut catalog = Catalog::with_clock(FixedYear(2024));
    catalog.add(book("Only", 2001)).unwrap();

    let err = catalog.add(None::<Record>).unwrap_err();
    assert_eq!(err, NullRecordError);
    assert_eq!(
        err.to_string(),
        "cannot add an absent record to the catalog"
    );
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].title(), "Only");
}

#[test]
fn dispose_empties_catalog_and_is_idempotent() {
    let mut catalog = Catalog::with_clock(FixedYear(2024));
    catalog.add(book("One", 2000)).unwrap();
    catalog.add(book("Two", 2001)).unwrap();

    assert_eq!(catalog.dispose(), 2);
    assert!(catalog.is_empty());
    assert_eq!(catalog.list_all().collect::<Vec<_>>(), vec![ListingLine::Empty]);

    assert_eq!(catalog.dispose(), 0);
    assert!(catalog.is_empty());
    assert_eq!(catalog.list_all().collect::<Vec<_>>(), vec![ListingLine::Empty]);
}

#[test]
fn disposed_catalog_accepts_new_entries() {
    let mut catalog = Catalog::with_clock(FixedYear(2024));
    catalog.add(book("Before", 2000)).unwrap();
    catalog.dispose();

    let confirmation = catalog.add(book("After", 2010)).unwrap();
    assert_eq!(confirmation.position, 1);
    assert_eq!(confirmation.to_string(), "Book 'After' added.");
}

#[test]
fn listing_uses_catalog_clock_for_age() {
    let mut catalog = Catalog::with_clock(FixedYear(2030));
    catalog.add(book("Aged", 2000)).unwrap();

    let listed = descriptions(&catalog);
    assert!(listed[0].contains("Age: 30 years"));
    assert_eq!(catalog.current_year(), 2030);
}
