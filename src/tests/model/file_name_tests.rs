use super::*;

#[test]
fn accepts_names_with_inner_punctuation_and_spaces() {
    assert!(is_valid_file_name("a..b"));
    assert!(is_valid_file_name("a b"));
    assert!(is_valid_file_name("src/index.js"));
    assert!(is_valid_file_name("x"));
    assert!(is_valid_file_name("a+b=c_d-e"));
}

#[test]
fn rejects_non_alphanumeric_edges() {
    assert_eq!(validate_file_name("-ab"), Err(FileNameError::BadStart));
    assert_eq!(validate_file_name("ab-"), Err(FileNameError::BadEnd));
    assert_eq!(validate_file_name(".hidden"), Err(FileNameError::BadStart));
    assert_eq!(validate_file_name("dir/"), Err(FileNameError::BadEnd));
}

#[test]
fn rejects_empty_and_disallowed_chars() {
    assert_eq!(validate_file_name(""), Err(FileNameError::Empty));
    assert_eq!(validate_file_name("a#b"), Err(FileNameError::BadChar('#')));
    assert_eq!(validate_file_name("é"), Err(FileNameError::BadStart));
}

#[test]
fn error_messages_are_user_facing() {
    let err = validate_file_name("ab-").unwrap_err();
    assert_eq!(err.to_string(), "file name must end with a letter or digit");
}
