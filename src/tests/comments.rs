use super::*;

fn value_of(input: &str) -> serde_json::Value {
    serde_json::from_str(&repair_json(input)).unwrap()
}

#[test]
fn line_comment_to_end_of_line() {
    assert_eq!(
        value_of("{ \"a\": 1 // comment\n }"),
        serde_json::json!({"a": 1})
    );
}

#[test]
fn line_comment_without_trailing_newline() {
    assert_eq!(value_of("{ \"a\": 1 } // done"), serde_json::json!({"a": 1}));
}

#[test]
fn block_comment_single_line() {
    assert_eq!(
        value_of("{ /* note */ \"a\": 1 }"),
        serde_json::json!({"a": 1})
    );
}

#[test]
fn block_comment_spans_lines_non_greedy() {
    // Non-greedy: the first */ closes, the second block is separate.
    assert_eq!(
        value_of("[ /* one\n two */ 1, /* three */ 2 ]"),
        serde_json::json!([1, 2])
    );
}

#[test]
fn unclosed_block_comment_swallows_the_rest() {
    assert_eq!(value_of("[1, 2] /* trailing"), serde_json::json!([1, 2]));
}

#[test]
fn comment_markers_between_every_token() {
    assert_eq!(
        value_of("{// a\n key /* x */ : // b\n [1 /* y */, 2] }"),
        serde_json::json!({"key": [1, 2]})
    );
}

#[test]
fn slash_in_bare_word_is_not_a_comment() {
    assert_eq!(
        value_of("{path: a/b.txt}"),
        serde_json::json!({"path": "a/b.txt"})
    );
}

#[test]
fn comment_like_text_inside_strings_is_stripped_too() {
    // The comment pass runs before tokenization and is not string-aware, so
    // a // inside a quoted value truncates the string and the raw repair
    // output no longer parses. A known limitation, asserted here so a
    // behavior change is noticed.
    let input = r#"{"url": "http://x"}"#;
    let out = repair_json(input);
    assert!(serde_json::from_str::<serde_json::Value>(&out).is_err());
    // The strict-first entry point is unaffected: valid input never repairs.
    let parsed = parse_json_with_repair(input).unwrap();
    assert!(!parsed.repaired);
    assert_eq!(parsed.value["url"], "http://x");
}
