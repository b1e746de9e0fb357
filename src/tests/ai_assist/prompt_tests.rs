use super::*;
use crate::model::{File, FileId, TabState, VzContent};

fn content(files: &[(&str, &str, &str)]) -> VzContent {
    let mut c = VzContent::default();
    for (id, name, text) in files {
        c.files.insert(
            FileId::from(*id),
            File {
                name: name.to_string(),
                text: text.to_string(),
            },
        );
    }
    c
}

#[test]
fn single_tab_prompt_is_exact() {
    let c = content(&[("a", "a", "hello")]);
    let tabs = vec![TabState::transient(FileId::from("a"))];
    let prompt = build_prompt(&c, &tabs, "wor");
    assert_eq!(prompt, "File `a`:\n```hello```\n\nCurrent File:\nwor");
}

#[test]
fn files_context_trims_and_joins_with_blank_line() {
    let c = content(&[("a", " a.js ", "\n let x;\n"), ("b", "b.js", "y")]);
    let ctx = generate_files_context(c.files.values());
    assert_eq!(ctx, "File `a.js`:\n```let x;```\n\nFile `b.js`:\n```y```");
}

#[test]
fn no_tabs_yields_only_current_file() {
    let c = content(&[]);
    assert_eq!(build_prompt(&c, &[], "abc"), "Current File:\nabc");
}

#[test]
fn missing_tab_files_are_skipped() {
    let c = content(&[("a", "a", "1")]);
    let tabs = vec![
        TabState::persistent(FileId::from("gone")),
        TabState::persistent(FileId::from("a")),
    ];
    assert_eq!(
        build_prompt(&c, &tabs, ""),
        "File `a`:\n```1```\n\nCurrent File:\n"
    );
}

#[test]
fn text_before_caret_counts_chars() {
    assert_eq!(text_before_caret("world", 3), "wor");
    assert_eq!(text_before_caret("héllo", 2), "hé");
    assert_eq!(text_before_caret("abc", 99), "abc");
    assert_eq!(text_before_caret("abc", 0), "");
}
