//! Whole-document normalization properties
use mdnorm::normalize_document;

#[test]
fn test_heading_general_case() {
    assert_eq!(normalize_document("text\n# Heading"), "text\n\n# Heading");
}

#[test]
fn test_heading_start_of_file_exemption() {
    let text = "# Title\n\nbody\n";
    assert_eq!(normalize_document(text), text);
}

#[test]
fn test_table_missing_outer_spaces() {
    assert_eq!(normalize_document("|a|b|"), "| a | b |");
}

#[test]
fn test_table_already_correct() {
    assert_eq!(normalize_document("| a | b |"), "| a | b |");
}

#[test]
fn test_single_pipe_line_rejected() {
    assert_eq!(normalize_document("a|b"), "a|b");
}

#[test]
fn test_code_block_immunity_for_tables() {
    let text = "```\n|a|b|\n|c|d|\n```\n";
    assert_eq!(normalize_document(text), text);
}

#[test]
fn test_heading_rule_applies_even_inside_fences() {
    // The heading pass is a global text pass; a shell comment in a fence
    // that looks like a heading gains a blank line too.
    let text = "```sh\nls\n# comment\n```\n";
    assert_eq!(normalize_document(text), "```sh\nls\n\n# comment\n```\n");
}

#[test]
fn test_mixed_document() {
    let input = "\
# API Reference
Overview text.
## Endpoints
|name|method|
|---|---|
|list|GET|

```text
|raw|table|
```
";
    let expected = "\
# API Reference
Overview text.

## Endpoints
| name | method |
| --- | --- |
| list | GET |

```text
|raw|table|
```
";
    assert_eq!(normalize_document(input), expected);
}

#[test]
fn test_idempotence() {
    let inputs = [
        "text\n# Heading",
        "|a|b|\n|---|---|",
        "# Top\ntext\n## Next\n|x|y|",
        "```\n|a|b|\n```",
        "prose only, no structure at all",
        "",
    ];

    for input in inputs {
        let once = normalize_document(input);
        let twice = normalize_document(&once);
        assert_eq!(twice, once, "second pass changed output for {input:?}");
    }
}

#[test]
fn test_empty_document() {
    assert_eq!(normalize_document(""), "");
}

#[test]
fn test_non_markdown_text_passes_through() {
    let text = "just some notes\nwith no structure\n";
    assert_eq!(normalize_document(text), text);
}
