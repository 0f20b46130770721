use diagram_tables_engine::{Replacement, convert_document, find_blocks, pipeline};
use pretty_assertions::assert_eq;
use std::fs;

fn fixture(name: &str) -> String {
    fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

#[test]
fn fixture_blog_post() {
    let input = fixture("blog_post.md");
    let expected = fixture("blog_post.expected.md");

    let result = convert_document(&input);

    assert_eq!(result.block_count(), 4);
    assert_eq!(result.into_text(&input), expected);
}

#[test]
fn fixture_output_has_no_diagram_blocks() {
    let expected = fixture("blog_post.expected.md");

    assert!(find_blocks(&expected).is_empty());
    assert_eq!(convert_document(&expected), Replacement::NoBlocks);
}

#[test]
fn fixture_converted_in_place() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("stack.md"), fixture("blog_post.md")).unwrap();
    fs::write(dir.path().join("notes.txt"), "```mermaid\ngraph TD\n```\n").unwrap();

    let summary = pipeline::convert_all(dir.path(), "*.md").unwrap();

    assert_eq!(summary.outcomes.len(), 1);
    assert_eq!(
        summary.outcomes[0].1,
        pipeline::FileOutcome::Converted { blocks: 4 }
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("stack.md")).unwrap(),
        fixture("blog_post.expected.md")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "```mermaid\ngraph TD\n```\n"
    );
}
