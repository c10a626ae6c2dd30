//! Batch rendering: persons in, one text blob per book group out.
//!
//! Persons are sorted by [`Person::sorting_key`] and cut into contiguous
//! runs that share a book group. Because the groups partition the alphabet
//! into consecutive ranges, every non-empty group forms exactly one run.

use tracing::{debug, info};

use crate::error::{MemoriamError, Result};
use crate::groups::book_group;
use crate::person::Person;
use crate::source::RawPerson;
use crate::template::Layout;

/// Marker placed between two persons in the same book.
pub const PAGE_BREAK: &str = "<pb>";

/// The rendered text of one book group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Book group label, e.g. `"KLMNOP"`.
    pub label: &'static str,
    /// Formatted persons joined by [`PAGE_BREAK`].
    pub text: String,
    /// Number of persons in this book.
    pub count: usize,
}

/// Build persons from source records, numbering them in source order.
pub fn build_persons(records: Vec<RawPerson>) -> Vec<Person> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, raw)| Person::from_raw(position, raw))
        .collect()
}

/// Book group of a person, from the first character of its sorting key.
fn group_of(person: &Person) -> Result<&'static str> {
    let key = person.sorting_key();
    let ch = key.chars().next().ok_or(MemoriamError::EmptySortingKey {
        position: person.position,
    })?;
    book_group(ch).ok_or_else(|| MemoriamError::UnmappedBucket {
        key: key.to_string(),
        ch,
    })
}

/// Sort persons and split them into `(label, persons)` runs.
pub fn group_persons(mut persons: Vec<Person>) -> Result<Vec<(&'static str, Vec<Person>)>> {
    if let Some(person) = persons.iter().find(|p| !p.has_identity()) {
        return Err(MemoriamError::MissingIdentity {
            position: person.position,
        });
    }

    persons.sort_by_cached_key(Person::sorting_key);

    let mut groups: Vec<(&'static str, Vec<Person>)> = Vec::new();
    for person in persons {
        let label = group_of(&person)?;
        match groups.last_mut() {
            Some((last, members)) if *last == label => members.push(person),
            _ => groups.push((label, vec![person])),
        }
    }
    Ok(groups)
}

/// Render persons into one bucket per non-empty book group, in alphabetical
/// group order.
pub fn render_persons(persons: Vec<Person>, layout: &Layout) -> Result<Vec<Bucket>> {
    let total = persons.len();
    let groups = group_persons(persons)?;

    let mut buckets = Vec::with_capacity(groups.len());
    for (label, members) in groups {
        let texts = members
            .iter()
            .map(|p| p.format(layout))
            .collect::<Result<Vec<_>>>()?;
        debug!(label, count = members.len(), "rendered book group");
        buckets.push(Bucket {
            label,
            text: texts.join(PAGE_BREAK),
            count: members.len(),
        });
    }

    info!(persons = total, books = buckets.len(), "rendered persons");
    Ok(buckets)
}

/// Convenience wrapper: build persons from source records and render them.
pub fn render_records(records: Vec<RawPerson>, layout: &Layout) -> Result<Vec<Bucket>> {
    render_persons(build_persons(records), layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::parse_records;
    use crate::template::Template;
    use std::fs;
    use std::path::Path;

    fn person(name: &str, nicknames: &[&str]) -> Person {
        Person {
            name: name.to_string(),
            nicknames: nicknames.iter().map(|n| n.to_string()).collect(),
            ..Default::default()
        }
    }

    fn labels(buckets: &[Bucket]) -> Vec<&str> {
        buckets.iter().map(|b| b.label).collect()
    }

    #[test]
    fn test_two_books() {
        let persons = vec![person("Smith", &[]), person("Bader", &[])];
        let buckets = render_persons(persons, &Layout::FixedOrder).unwrap();
        assert_eq!(labels(&buckets), vec!["ABCDE", "QRSTU"]);
        assert_eq!(buckets[0].text, "Bader");
        assert_eq!(buckets[1].text, "Smith");
    }

    #[test]
    fn test_same_book_joined_with_page_break() {
        let persons = vec![
            person("Kim Lee", &[]),
            person("", &["nightwing"]),
            person("Pat Moss", &[]),
        ];
        let buckets = render_persons(persons, &Layout::FixedOrder).unwrap();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].label, "KLMNOP");
        assert_eq!(buckets[0].count, 3);
        assert_eq!(buckets[0].text, "Kim Lee<pb>nightwing<pb>Pat Moss");
    }

    #[test]
    fn test_nickname_decides_book() {
        // Sorted as "ZIB", so it lands in VWXYZ despite the name.
        let persons = vec![person("Anna Smith", &["zib"])];
        let buckets = render_persons(persons, &Layout::FixedOrder).unwrap();
        assert_eq!(labels(&buckets), vec!["VWXYZ"]);
        assert_eq!(buckets[0].text, "Anna \"zib\" Smith");
    }

    #[test]
    fn test_same_letter_same_book() {
        for ch in 'A'..='Z' {
            let persons = vec![
                person(&format!("{ch}aa"), &[]),
                person(&format!("{ch}zz"), &[]),
                person(&format!("{ch}mm"), &[]),
            ];
            let buckets = render_persons(persons, &Layout::FixedOrder).unwrap();
            assert_eq!(buckets.len(), 1, "letter {ch}");
            assert_eq!(buckets[0].count, 3);
        }
    }

    #[test]
    fn test_one_run_per_book() {
        let names = ["Yuri", "Al", "Quinn", "Ed", "Fay", "Zed", "Kai", "Ivy", "Pia", "Uma"];
        let persons = names.iter().map(|n| person(n, &[])).collect();
        let buckets = render_persons(persons, &Layout::FixedOrder).unwrap();
        assert_eq!(labels(&buckets), vec!["ABCDE", "FGHIJ", "KLMNOP", "QRSTU", "VWXYZ"]);
        assert_eq!(buckets[0].text, "Al<pb>Ed");
        assert_eq!(buckets[4].text, "Yuri<pb>Zed");
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut first = person("Anna", &[]);
        first.extra = "first".to_string();
        let mut second = person("Anna", &[]);
        second.extra = "second".to_string();
        let buckets = render_persons(vec![first, second], &Layout::FixedOrder).unwrap();
        assert_eq!(buckets[0].text, "Anna\n\nfirst<pb>Anna\n\nsecond");
    }

    #[test]
    fn test_missing_identity_aborts() {
        let records = parse_records("- name: Anna\n- description: nobody\n").unwrap();
        let err = render_records(records, &Layout::FixedOrder).unwrap_err();
        assert!(matches!(err, MemoriamError::MissingIdentity { position: 1 }));
    }

    #[test]
    fn test_unmapped_bucket_aborts() {
        let err = render_persons(vec![person("anna", &[])], &Layout::FixedOrder).unwrap_err();
        match err {
            MemoriamError::UnmappedBucket { key, ch } => {
                assert_eq!(key, "anna");
                assert_eq!(ch, 'a');
            }
            other => panic!("Expected UnmappedBucket, got {other:?}"),
        }
        assert!(render_persons(vec![person("", &["1stborn"])], &Layout::FixedOrder).is_err());
    }

    #[test]
    fn test_empty_nickname_is_its_own_error() {
        let records = parse_records("- name: Anna\n- nicks: [\"\"]\n").unwrap();
        let err = render_records(records, &Layout::FixedOrder).unwrap_err();
        assert!(matches!(err, MemoriamError::EmptySortingKey { position: 1 }));
        assert_eq!(err.to_string(), "record #1 has an empty sorting key");
    }

    #[test]
    fn test_empty_input_renders_nothing() {
        assert!(render_persons(vec![], &Layout::FixedOrder).unwrap().is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("specs");
        let yaml = fs::read_to_string(spec_dir.join("persons.yaml")).unwrap();
        let template = fs::read_to_string(spec_dir.join("person-format.txt")).unwrap();
        let layout = Layout::Template(Template::parse(&template).unwrap());

        let first = render_records(parse_records(&yaml).unwrap(), &layout).unwrap();
        let second = render_records(parse_records(&yaml).unwrap(), &layout).unwrap();
        assert_eq!(first, second);
    }

    /// Render the fixture data and compare each book with its expected file.
    fn assert_fixture(layout: &Layout, suffix: &str) {
        let spec_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("specs");
        let yaml = fs::read_to_string(spec_dir.join("persons.yaml")).unwrap();
        let buckets = render_records(parse_records(&yaml).unwrap(), layout).unwrap();

        assert_eq!(labels(&buckets), vec!["ABCDE", "QRSTU", "VWXYZ"]);
        for bucket in &buckets {
            let expected_file = spec_dir.join(format!("expected-{suffix}-{}.txt", bucket.label));
            let expected = fs::read_to_string(&expected_file).unwrap();
            assert_eq!(
                bucket.text,
                expected.trim_end_matches('\n'),
                "book {} differs from {}",
                bucket.label,
                expected_file.display()
            );
        }
    }

    #[test]
    fn test_fixture_template_layout() {
        let spec_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("specs");
        let template = fs::read_to_string(spec_dir.join("person-format.txt")).unwrap();
        assert_fixture(&Layout::Template(Template::parse(&template).unwrap()), "template");
    }

    #[test]
    fn test_fixture_fixed_layout() {
        assert_fixture(&Layout::FixedOrder, "fixed");
    }
}
