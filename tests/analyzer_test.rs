use text_analyzer::analyzer::{analyze, count_sentences, title_case, AnalysisError};

#[test]
fn test_empty_input_is_rejected() {
    assert_eq!(analyze(""), Err(AnalysisError::EmptyInput));
    assert_eq!(AnalysisError::EmptyInput.to_string(), "Please enter some text.");
}

#[test]
fn test_whitespace_only_input_is_analysed() {
    let result = analyze("   ").unwrap();
    assert_eq!(result.letter_count, 3);
    assert_eq!(result.word_count, 0);
    assert_eq!(result.sentence_count, 0);
}

#[test]
fn test_case_conversions_match_std() {
    for s in ["Hello World!", "MiXeD cAsE 123", "a", "already lower", "ALREADY UPPER"] {
        let result = analyze(s).unwrap();
        assert_eq!(result.original, s);
        assert_eq!(result.lower, s.to_ascii_lowercase());
        assert_eq!(result.upper, s.to_ascii_uppercase());
    }
}

#[test]
fn test_reversed_twice_is_original() {
    for s in ["Hello World!", "racecar", "ab", "x y z."] {
        let reversed = analyze(s).unwrap().reversed;
        let back = analyze(&reversed).unwrap().reversed;
        assert_eq!(back, s);
    }
    assert_eq!(analyze("abc def").unwrap().reversed, "fed cba");
}

#[test]
fn test_sentence_count() {
    assert_eq!(analyze("Hello World!").unwrap().sentence_count, 1);
    assert_eq!(analyze("A. B? C!").unwrap().sentence_count, 3);
    assert_eq!(count_sentences("Wait... what?!"), 2);
    assert_eq!(count_sentences("no terminator"), 1);
    assert_eq!(count_sentences(". . !"), 0);
}

#[test]
fn test_word_count() {
    assert_eq!(analyze("the quick fox").unwrap().word_count, 3);
    assert_eq!(analyze("  a   b ").unwrap().word_count, 2);
    assert_eq!(analyze("tab\tseparated\nwords").unwrap().word_count, 3);
}

#[test]
fn test_vowels_and_consonants() {
    let result = analyze("Hello").unwrap();
    assert_eq!(result.vowel_count, 2);
    assert_eq!(result.consonant_count, 3);

    // Case-insensitive, digits and punctuation ignored
    let result = analyze("AEIOU xyz 42!").unwrap();
    assert_eq!(result.vowel_count, 5);
    assert_eq!(result.consonant_count, 3);
}

#[test]
fn test_letter_count_counts_every_character() {
    let result = analyze("Hi, you!").unwrap();
    assert_eq!(result.letter_count, 8);
    assert!(result.letter_count > result.vowel_count + result.consonant_count);

    // Characters, not bytes
    assert_eq!(analyze("héllo").unwrap().letter_count, 5);
}

#[test]
fn test_title_case() {
    assert_eq!(title_case("hello world"), "Hello World");
    assert_eq!(title_case("hELLO wORLD"), "Hello World");
    assert_eq!(title_case("they're 1st"), "They'Re 1St");
    assert_eq!(title_case("foo-bar_baz"), "Foo-Bar_Baz");
    assert_eq!(title_case("  spaced  out "), "  Spaced  Out ");
    // Expanding uppercase forms keep only their first letter capitalised
    assert_eq!(title_case("ßtraße"), "Sstraße");
    assert_eq!(title_case("ﬁne"), "Fine");
    assert_eq!(title_case("ǆungla"), "ǅungla");
    assert_eq!(analyze("the quick fox").unwrap().title_case, "The Quick Fox");
}

#[test]
fn test_conversions_report() {
    let report = analyze("Hi there").unwrap().conversions_report();
    assert_eq!(
        report,
        "Original: Hi there\n\
        Lower Case: hi there\n\
        Upper Case: HI THERE\n\
        Title Case: Hi There\n\
        Reversed: ereht iH\n"
    );
}
