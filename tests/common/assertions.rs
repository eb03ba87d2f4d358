//! Custom test assertions
//!
//! Provides assertions for bannered dump blocks.

/// Assert `contents` is exactly one dump block for `descr` and return its body
pub fn assert_dump_block<'a>(contents: &'a str, descr: &str) -> &'a str {
    let start = format!(
        "{descr} ------------------------- dump start ---------------------------------------\n"
    );
    let end = format!(
        "{descr} -------------------------  dump end  ---------------------------------------\n\n"
    );

    assert!(
        contents.starts_with(&start),
        "Expected dump start banner for {descr:?}, got {contents:?}"
    );
    assert!(
        contents.ends_with(&end),
        "Expected dump end banner for {descr:?}, got {contents:?}"
    );

    &contents[start.len()..contents.len() - end.len()]
}
