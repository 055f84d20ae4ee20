use keyprobe::find_key;

#[test]
fn test_second_line_match() {
    let entry = find_key("OTHER_KEY=123\nAPP_KEY=base64:xyz\n", "APP_KEY").expect("APP_KEY is defined");

    assert_eq!(entry.key(), "APP_KEY");
    assert_eq!(entry.lineno(), 2);
    assert_eq!(entry.raw_line(), "APP_KEY=base64:xyz");
    assert_eq!(entry.value(), "base64:xyz");
}

#[test]
fn test_first_match_wins() {
    let entry = find_key("APP_KEY=first\nAPP_KEY=second\n", "APP_KEY").expect("APP_KEY is defined");

    assert_eq!(entry.lineno(), 1);
    assert_eq!(entry.value(), "first");
}

#[test]
fn test_empty_value() {
    let entry = find_key("APP_KEY=", "APP_KEY").expect("APP_KEY is defined");

    assert_eq!(entry.raw_line(), "APP_KEY=");
    assert_eq!(entry.value(), "");
}

#[test]
fn test_prefix_includes_equals_sign() {
    assert_eq!(find_key("APP_KEYFOO=1\nAPP_KEY_OLD=2\n", "APP_KEY"), None);

    let entry = find_key("APP_KEYFOO=1\nAPP_KEY=3\n", "APP_KEY").expect("APP_KEY is defined");
    assert_eq!(entry.lineno(), 2);
    assert_eq!(entry.value(), "3");
}

#[test]
fn test_lines_are_trimmed() {
    let entry = find_key("\n\t  APP_KEY=base64:abc  \r\n", "APP_KEY").expect("APP_KEY is defined");

    assert_eq!(entry.lineno(), 2);
    assert_eq!(entry.raw_line(), "APP_KEY=base64:abc");
    assert_eq!(entry.value(), "base64:abc");
}

#[test]
fn test_no_interpretation_of_the_line() {
    // spaces around '=', comments and exports are plain text
    assert_eq!(find_key("APP_KEY = x\n# APP_KEY=y\nexport APP_KEY=z\n", "APP_KEY"), None);

    let entry = find_key("APP_KEY=\"quoted\" # comment", "APP_KEY").expect("APP_KEY is defined");
    assert_eq!(entry.value(), "\"quoted\" # comment");
}

#[test]
fn test_value_keeps_further_equals_signs() {
    let entry = find_key("APP_KEY=base64:AbC123==", "APP_KEY").expect("APP_KEY is defined");
    assert_eq!(entry.value(), "base64:AbC123==");
}

#[test]
fn test_not_found() {
    assert_eq!(find_key("", "APP_KEY"), None);
    assert_eq!(find_key("no equals sign here\nAPP_KEY\n", "APP_KEY"), None);
}

#[test]
fn test_line_numbers_count_blank_lines() {
    let entry = find_key("\n\n\nAPP_KEY=x", "APP_KEY").expect("APP_KEY is defined");
    assert_eq!(entry.lineno(), 4);
}
