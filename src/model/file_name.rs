use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileNameError {
    #[error("file name cannot be empty")]
    Empty,
    #[error("file name must start with a letter or digit")]
    BadStart,
    #[error("file name must end with a letter or digit")]
    BadEnd,
    #[error("file name cannot contain {0:?}")]
    BadChar(char),
}

fn is_edge_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

fn is_inner_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '/' | '+' | '=' | '_' | '-')
}

/// Accepts names matching `^[a-zA-Z0-9](?:[a-zA-Z0-9 ./+=_-]*[a-zA-Z0-9])?$`.
pub fn validate_file_name(name: &str) -> Result<(), FileNameError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(FileNameError::Empty);
    };
    if !is_edge_char(first) {
        return Err(FileNameError::BadStart);
    }
    if let Some(c) = name.chars().find(|c| !is_inner_char(*c)) {
        return Err(FileNameError::BadChar(c));
    }
    match name.chars().last() {
        Some(last) if is_edge_char(last) => Ok(()),
        _ => Err(FileNameError::BadEnd),
    }
}

pub fn is_valid_file_name(name: &str) -> bool {
    validate_file_name(name).is_ok()
}
