use std::collections::HashSet;
use std::sync::Arc;

use wordfreq_core::{IdentityStemmer, Language, Options, StopWordSet, Term, WordFreq};

fn find(list: &[Term], term: &str) -> Option<usize> {
    list.iter().find(|t| t.term == term).map(|t| t.count)
}

#[test]
fn test_default_engine_on_mixed_text() {
    let mut wf = WordFreq::default();
    let list = wf.process("Rust is great. Rust 很好用，很好用！").to_vec();

    assert_eq!(list, vec![Term::new("Rust", 2), Term::new("很好用", 2)]);
}

#[test]
fn test_languages_do_not_collide() {
    let mut wf = WordFreq::new(Options::new().with_minimum_count(1));
    let list = wf.process("book books 書本 書本 book").to_vec();

    let unique: HashSet<&str> = list.iter().map(|t| t.term.as_str()).collect();
    assert_eq!(unique.len(), list.len());
    assert_eq!(find(&list, "book"), Some(3));
    assert_eq!(find(&list, "書本"), Some(2));
}

#[test]
fn test_english_contractions_end_to_end() {
    let options = Options::new()
        .with_languages([Language::English])
        .with_stop_word_sets([])
        .with_minimum_count(1);
    let mut wf = WordFreq::new(options);
    let list = wf.process("can't can't book's").to_vec();

    assert_eq!(list, vec![Term::new("can", 2), Term::new("book", 1)]);
}

#[test]
fn test_default_stop_words_drop_function_words() {
    let mut wf = WordFreq::new(Options::new().with_minimum_count(1));
    let list = wf.process("the cat and the hat can't").to_vec();

    assert_eq!(find(&list, "the"), None);
    assert_eq!(find(&list, "and"), None);
    // "can" is in english2
    assert_eq!(find(&list, "can"), None);
    assert_eq!(find(&list, "cat"), Some(1));
}

#[test]
fn test_minimum_count_boundary() {
    let mut wf = WordFreq::new(Options::new().with_minimum_count(3));
    let list = wf.process("alpha alpha alpha beta beta").to_vec();

    assert_eq!(list, vec![Term::new("alpha", 3)]);
}

#[test]
fn test_list_is_stable_without_new_counts() {
    let mut wf = WordFreq::default();
    let first = wf.process("river river stone stone stone").to_vec();
    let second = wf.process("").to_vec();

    assert_eq!(first, second);
    assert_eq!(wf.list(), first.as_slice());
    assert_eq!(first[0], Term::new("stone", 3));
}

#[test]
fn test_reset_behaves_like_new_engine() {
    let text = "台北市，台北市。台北 Taipei Taipei";
    let mut fresh = WordFreq::default();
    let expected = fresh.process(text).to_vec();

    let mut reused = WordFreq::default();
    reused.process("something else entirely else 別的別的");
    reused.empty();
    assert!(reused.list().is_empty());

    assert_eq!(reused.process(text), expected.as_slice());
}

#[test]
fn test_chinese_substring_filtering() {
    let options = Options::new()
        .with_languages([Language::Chinese])
        .with_minimum_count(1);
    let mut wf = WordFreq::new(options);
    let list = wf.process("台北市，台北市。台北").to_vec();

    assert_eq!(list, vec![Term::new("台北", 3), Term::new("台北市", 2)]);
}

#[test]
fn test_chinese_without_substring_filtering() {
    let options = Options::new()
        .with_languages([Language::Chinese])
        .with_no_filter_substring(true);
    let mut wf = WordFreq::new(options);
    let list = wf.process("台北市，台北市。台北").to_vec();

    assert_eq!(
        list,
        vec![Term::new("台北", 3), Term::new("北市", 2), Term::new("台北市", 2)]
    );
}

#[test]
fn test_max_phrase_length_limits_phrases() {
    let options = Options::new()
        .with_languages([Language::Chinese])
        .with_max_phrase_length(2)
        .with_no_filter_substring(true);
    let mut wf = WordFreq::new(options);
    let list = wf.process("日本語学校，日本語学校").to_vec();

    assert!(list.iter().all(|t| t.term.chars().count() <= 2));
    for phrase in ["日本", "本語", "語学", "学校"] {
        assert_eq!(find(&list, phrase), Some(2), "{phrase}");
    }
}

#[test]
fn test_chinese_stop_word_splits_phrases() {
    let options = Options::new()
        .with_languages([Language::Chinese])
        .with_stop_words(["的"])
        .with_no_filter_substring(true);
    let mut wf = WordFreq::new(options);
    let list = wf.process("我的朋友，我的朋友").to_vec();

    assert_eq!(find(&list, "我的"), Some(2));
    assert_eq!(find(&list, "朋友"), Some(2));
    assert!(list.iter().all(|t| !t.term.contains("的朋")));
}

#[test]
fn test_kana_stop_words_act_as_boundaries() {
    let options = Options::new()
        .with_languages([Language::Chinese])
        .with_stop_word_sets([StopWordSet::Cjk]);
    let mut wf = WordFreq::new(options);
    let list = wf.process("日本の学校、日本の学校").to_vec();

    assert_eq!(list, vec![Term::new("学校", 2), Term::new("日本", 2)]);
}

#[test]
fn test_case_insensitive_stop_words_option() {
    let text = "The cat. The hat. The end.";
    let options = Options::new().with_languages([Language::English]);

    let mut exact = WordFreq::new(options.clone());
    assert_eq!(find(exact.process(text), "The"), Some(3));

    let mut folded = WordFreq::new(options.with_case_insensitive_stop_words(true));
    assert_eq!(find(folded.process(text), "The"), None);
}

#[test]
fn test_options_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordfreq.json");
    std::fs::write(
        &path,
        r#"{"languages": ["english"], "stop_words": ["alpha"], "minimum_count": 1}"#,
    )
    .unwrap();

    let mut wf = WordFreq::new(Options::from_path(&path).unwrap());
    let list = wf.process("alpha beta 中文中文").to_vec();

    assert_eq!(list, vec![Term::new("beta", 1)]);
}

#[test]
fn test_shortest_form_represents_stem() {
    let options = Options::new().with_languages([Language::English]);
    let mut wf = WordFreq::new(options);

    assert_eq!(wf.process("Running run runs"), &[Term::new("run", 3)]);
}

#[test]
fn test_injected_stemmer() {
    let options = Options::new()
        .with_languages([Language::English])
        .with_minimum_count(1);
    let mut wf = WordFreq::with_stemmer(options, Arc::new(IdentityStemmer));
    let list = wf.process("Running run runs").to_vec();

    assert_eq!(
        list,
        vec![Term::new("Running", 1), Term::new("run", 1), Term::new("runs", 1)]
    );
}
