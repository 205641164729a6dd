use lemmafa::{
    lemmatize, load_dictionary, normalize, AffixTable, LemmaDictionary, Lemmatizer,
    LemmatizerConfigBuilder, LoadError, Strategy,
};
use std::io::ErrorKind;
use std::sync::Arc;
use std::thread;

const DICTIONARY_PATH: &str = "tests/lemma_dict.txt";

fn load() -> LemmaDictionary {
    load_dictionary(DICTIONARY_PATH).expect("file lemma_dict.txt not found in test directory")
}

#[test]
fn lemmatize_sentence() {
    let dictionary = load();
    let text = "او دیروز به مدرسه رفت و با دوستانش صحبت کرد. بعد از آن، او به خانه آمد و شام خورد.";
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '.' || c == '،')
        .filter(|t| !t.is_empty())
        .collect();
    let lemmas: Vec<String> = tokens.iter().map(|t| lemmatize(t, &dictionary)).collect();
    let expected = vec![
        "او", "دیروز", "به", "مدرسه", "رفت#رو", "و", "با", "دوستانش", "صحبت", "کرد#کن", "بعد",
        "از", "آن", "او", "به", "خانه", "آمد#آ", "و", "شام", "خورد#خور",
    ];
    assert_eq!(lemmas, expected);
}

#[test]
fn two_field_records_are_skipped() {
    let dictionary = load();
    // "دوستان" only has two fields in the resource.
    assert!(!dictionary.contains("دوستان"));
    assert_eq!(dictionary.get("کتاب"), Some("کتاب"));
    // It is still resolved through the "ان" suffix.
    assert_eq!(lemmatize("دوستان", &dictionary), "دوست");
}

#[test]
fn plural_with_zero_width_non_joiner() {
    let dictionary = load();
    let lemmatizer = Lemmatizer::new(dictionary);
    assert_eq!(
        lemmatizer.lemmatize_with_strategy("کتاب\u{200C}ها"),
        (String::from("کتاب"), Strategy::Suffix)
    );
    assert_eq!(
        lemmatizer.lemmatize_with_strategy("بیکار"),
        (String::from("کار"), Strategy::Prefix)
    );
}

#[test]
fn empty_dictionary_returns_the_word() {
    let dictionary = LemmaDictionary::default();
    assert_eq!(lemmatize("نامه", &dictionary), "نامه");
}

#[test]
fn fallback_is_not_normalized() {
    let dictionary = load();
    let word = "علي\u{200C}رضا";
    assert_ne!(normalize(word), word);
    assert_eq!(lemmatize(word, &dictionary), word);
}

#[test]
fn missing_dictionary_is_an_io_error() {
    let err = load_dictionary("tests/does_not_exist.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("does_not_exist.txt"));
}

#[test]
fn custom_tables_and_report() {
    let dictionary = load();
    let config = LemmatizerConfigBuilder::new()
        .suffixes(AffixTable::new(["ها"]))
        .prefixes(AffixTable::default())
        .build();
    let lemmatizer = Lemmatizer::with_config(dictionary, config);
    let tokens = ["کتاب", "کتابها", "بیکار", "دوستان"];
    let reporter = lemmatizer.report(&tokens);
    assert_eq!(reporter.count(Strategy::Exact), 1);
    assert_eq!(reporter.count(Strategy::Suffix), 1);
    assert_eq!(reporter.count(Strategy::Prefix), 0);
    assert_eq!(reporter.count(Strategy::Unchanged), 2);
    assert_eq!(reporter.coverage(), 0.5);
}

#[test]
fn lemmatizer_is_shared_between_threads() {
    let lemmatizer = Arc::new(Lemmatizer::with_config(
        load(),
        LemmatizerConfigBuilder::new().parallel(true).build(),
    ));
    let handles: Vec<_> = ["کتاب\u{200C}ها", "مدرسه", "بیکار", "نامه"]
        .into_iter()
        .map(|word| {
            let lemmatizer = Arc::clone(&lemmatizer);
            thread::spawn(move || lemmatizer.lemmatize(word))
        })
        .collect();
    let lemmas: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(lemmas, vec!["کتاب", "مدرسه", "کار", "نامه"]);
}
