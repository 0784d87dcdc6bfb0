use binomen_core::error::NamingError;
use binomen_core::naming::fragment::Fragment;
use proptest::prelude::*;

#[test]
fn classify_derives_facets_from_first_and_last_letter() {
    let fragment = Fragment::classify("Elonus").unwrap();
    assert!(fragment.starts_with_vowel());
    assert!(!fragment.ends_with_vowel());

    let fragment = Fragment::classify("Thrivar").unwrap();
    assert!(!fragment.starts_with_vowel());
    assert!(!fragment.ends_with_vowel());

    let fragment = Fragment::classify("Aqua").unwrap();
    assert!(fragment.starts_with_vowel());
    assert!(fragment.ends_with_vowel());
}

#[test]
fn classify_vowel_test_is_case_insensitive() {
    let fragment = Fragment::classify("ASTRO").unwrap();
    assert!(fragment.starts_with_vowel());
    assert!(fragment.ends_with_vowel());
}

#[test]
fn classify_preserves_token_casing() {
    let fragment = Fragment::classify("Mari").unwrap();
    assert_eq!(fragment.text(), "Mari");
}

#[test]
fn classify_rejects_empty_token() {
    assert!(matches!(
        Fragment::classify(""),
        Err(NamingError::InvalidFragment { .. })
    ));
}

#[test]
fn classify_rejects_non_letter_tokens() {
    for token in ["mari2", "two words", "thermo-x", " tho", "pterus."] {
        assert!(
            matches!(
                Fragment::classify(token),
                Err(NamingError::InvalidFragment { .. })
            ),
            "token {:?} should be rejected",
            token
        );
    }
}

proptest! {
    #[test]
    fn alphabetic_tokens_always_classify(token in "[a-zA-Z]{1,16}") {
        let fragment = Fragment::classify(&token).unwrap();
        let first = token.chars().next().unwrap().to_ascii_lowercase();
        let last = token.chars().next_back().unwrap().to_ascii_lowercase();
        prop_assert_eq!(fragment.starts_with_vowel(), "aeiou".contains(first));
        prop_assert_eq!(fragment.ends_with_vowel(), "aeiou".contains(last));
    }
}
