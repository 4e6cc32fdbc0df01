//! End-to-end tests for the tagging pipeline.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use pretty_assertions::assert_eq;
use rstest::rstest;

use versetag::bible::{self, Customizations};
use versetag::services::expand;
use versetag::{BookId, Config, Granularity, Language, TagTarget, Tagger};

fn german() -> Tagger {
    Tagger::new(&Config::default()).unwrap()
}

fn english() -> Tagger {
    Tagger::new(&Config::for_language(Language::English)).unwrap()
}

fn id(s: &str) -> BookId {
    s.parse().unwrap()
}

#[test]
fn single_verse_reference() {
    let tagger = german();
    let refs = tagger.references("Joh 3,16");
    assert_eq!(refs.len(), 1);
    let r = &refs[0];
    assert_eq!(r.book, id("John"));
    assert_eq!(r.granularity, Granularity::Verse);
    assert_eq!((r.start_chapter, r.start_verse), (Some(3), Some(16)));
    assert_eq!(tagger.tags("Joh 3,16"), vec!["bible/Joh/3/16"]);
}

#[test]
fn mixed_range_and_list() {
    assert_eq!(
        german().tags("Joh 3,16-18.20"),
        vec!["bible/Joh/3/16", "bible/Joh/3/17", "bible/Joh/3/18", "bible/Joh/3/20"]
    );
}

#[test]
fn cross_chapter_range() {
    assert_eq!(
        german().tags("Joh 3,35-4,3"),
        vec![
            "bible/Joh/3/35",
            "bible/Joh/3/36",
            "bible/Joh/4/1",
            "bible/Joh/4/2",
            "bible/Joh/4/3",
        ]
    );
}

#[test]
fn inline_code_hides_references() {
    assert!(german().references("Text `Joh 3,16` more").is_empty());
}

#[test]
fn standalone_book_phrase() {
    let tagger = german();
    let refs = tagger.references("Kolosserbrief");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].granularity, Granularity::Book);
    assert_eq!(tagger.tags("Kolosserbrief"), vec!["bible/Kol"]);

    let config = Config { expand_whole_books: true, ..Config::default() };
    let tags = Tagger::new(&config).unwrap().tags("Kolosserbrief");
    assert_eq!(tags.len(), 95);
    assert!(tags.iter().all(|t| t.starts_with("bible/Kol/")));
}

#[test]
fn filename_matches_body_reference() {
    let tagger = german();
    let from_name = tagger.filename_reference("Joh 3,16.md").unwrap();
    let from_body = tagger.references("Joh 3,16").remove(0);
    assert_eq!(from_name, from_body);
}

#[test]
fn scanner_output_never_overlaps() {
    let text = "Joh 3,16-4,2 Joh 3 1. Joh 1,9 Kolosserbrief Kol 1,1-3.7 Ps 23-24 \
                Römerbrief Röm 8 Johannes 1,1.3-5 Offb 22,21 Ps 119,1-176";
    let refs = german().references(text);
    assert!(refs.len() >= 9);
    for (i, a) in refs.iter().enumerate() {
        for b in &refs[i + 1..] {
            assert!(!a.span.overlaps(&b.span), "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn tags_are_atomic_and_in_bounds() {
    let text = "Ps 117-119 Joh 3,16-18.20 Jud 1,20-99 Kol 4,10-5,3 Mal 3,1-4,6";
    let tagger = german();
    for reference in tagger.references(text) {
        for v in expand(&reference).unwrap() {
            assert!(v.chapter >= 1 && v.chapter <= bible::max_chapter(v.book));
            assert!(v.verse >= 1 && v.verse <= bible::max_verse(v.book, v.chapter).unwrap());
        }
    }
    for tag in tagger.tags(text) {
        let segments: Vec<&str> = tag.split('/').collect();
        assert_eq!(segments.len(), 4, "{tag}");
        assert!(segments[2..].iter().all(|s| s.chars().all(|c| c.is_ascii_digit())), "{tag}");
    }
}

#[test]
fn every_verse_tag_parses_back() {
    let tagger = german();
    let text = "1. Joh 4,7-12 Röm 12 Joh 21,24-25 Hld 2,1";
    for reference in tagger.references(text) {
        for verse in expand(&reference).unwrap() {
            let tag = format!(
                "bible/{}/{}/{}",
                tagger.display().display_id(verse.book),
                verse.chapter,
                verse.verse
            );
            assert!(tagger.tags(text).contains(&tag));
            assert_eq!(tagger.parse_tag(&tag), Some(TagTarget::Verse(verse)));
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let text = "Ps 23 und Joh 3,16-18. Siehe auch Kolosserbrief und `Röm 1,1`.";
    let tagger = german();
    assert_eq!(tagger.tags(text), tagger.tags(text));
    assert_eq!(german().tags(text), tagger.tags(text));
}

#[test]
fn long_spelling_is_consumed_whole() {
    let refs = german().references("Johannes 3,16");
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].text, "Johannes 3,16");
}

#[rstest]
#[case("John 3:16", &["bible/John/3/16"])]
#[case("John 3:16,18", &["bible/John/3/16", "bible/John/3/18"])]
#[case("1 John 1:9", &["bible/1John/1/9"])]
#[case("Jude 24-25", &[])]
#[case("Jude 1:24-25", &["bible/Jude/1/24", "bible/Jude/1/25"])]
fn english_notation(#[case] text: &str, #[case] expected: &[&str]) {
    let tags = english().tags(text);
    if expected.is_empty() {
        // Jude has one chapter, so "Jude 24-25" names chapters that do not exist
        assert!(tags.is_empty(), "{tags:?}");
    } else {
        assert_eq!(tags, expected);
    }
}

#[test]
fn customizations_add_remove_and_pin() {
    let json = r#"{
        "John": { "addAliases": ["Jo"], "pinned": "Johannes" },
        "Col": { "removeStandalone": ["Kolosserbrief"] }
    }"#;
    let config = Config {
        customizations: Customizations::from_json(json).unwrap(),
        ..Config::default()
    };
    let tagger = Tagger::new(&config).unwrap();
    assert_eq!(tagger.tags("Jo 1,1"), vec!["bible/Johannes/1/1"]);
    assert!(tagger.tags("Kolosserbrief").is_empty());
    assert_eq!(
        tagger.parse_tag("bible/Johannes/1/1"),
        Some(TagTarget::Verse(versetag::ExpandedReference::new(id("John"), 1, 1)))
    );
}

#[test]
fn customizations_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("customizations.json");
    std::fs::write(&path, r#"{ "Ps": { "addStandalone": ["Liederbuch Israels"] } }"#).unwrap();
    let config = Config {
        customizations: Customizations::from_path(&path).unwrap(),
        ..Config::default()
    };
    let tagger = Tagger::new(&config).unwrap();
    assert_eq!(tagger.tags("Das Liederbuch Israels"), vec!["bible/Ps"]);

    std::fs::write(&path, "not json").unwrap();
    assert!(Customizations::from_path(&path).is_err());
}

#[test]
fn unknown_pin_is_a_config_error() {
    let config = Config {
        customizations: Customizations::from_json(r#"{ "John": { "pinned": "Lukas" } }"#).unwrap(),
        ..Config::default()
    };
    assert!(Tagger::new(&config).unwrap_err().is_config());
}

#[test]
fn malformed_documents_never_fail() {
    let tagger = german();
    for text in ["", "Joh", "Joh ,", "Joh 3,", "Joh 0,0", "Joh 3,16-", "Joh 4,3-3,1", "```Joh 3,16"] {
        let _ = tagger.tags(text);
    }
    assert!(tagger.tags("Joh 4,3-3,1").iter().all(|t| !t.contains('-')));
}

#[rstest]
#[case("Joh 3,0")]
#[case("Joh 3,1000")]
fn invalid_verse_numbers_emit_nothing(#[case] text: &str) {
    assert_eq!(german().tags(text), Vec::<String>::new());
}

#[test]
fn german_dates_are_not_amos() {
    let tagger = german();
    assert!(tagger.tags("Wir treffen uns am 3. Mai.").is_empty());
    assert_eq!(tagger.tags("Amos 5,24"), vec!["bible/Am/5/24"]);

    let json = r#"{ "Amos": { "addAliases": ["Am"] } }"#;
    let config = Config {
        customizations: Customizations::from_json(json).unwrap(),
        ..Config::default()
    };
    assert_eq!(Tagger::new(&config).unwrap().tags("Am 5,24"), vec!["bible/Am/5/24"]);
}
