//! Assembly tests: token runs into prompts, structural rules, variable
//! extraction.

use promptc_parser::ast::{assemble, AssembleError, File, Prompt};
use promptc_parser::casing::CaseStyle;
use promptc_parser::token::{scan, Kind};

fn parse(name: &str, content: &str) -> Result<File, AssembleError> {
    File::parse(name, content.as_bytes().to_vec())
}

fn title_text(file: &File, prompt: &Prompt) -> String {
    let title = prompt.title.expect("prompt has a title");
    String::from_utf8_lossy(title.get(&file.content)).into_owned()
}

#[test]
fn sole_untitled_prompt_is_valid() {
    let file = parse("hello1.prompt", "say hello to <!username>").expect("parses");
    assert_eq!(file.name, "hello1");
    assert_eq!(file.prompts.len(), 1);
    assert!(file.prompts[0].title.is_none());
    assert_eq!(file.prompts[0].body.len(), 2);
}

#[test]
fn titled_prompt_keeps_title_out_of_body() {
    let file = parse("greet.prompt", ".title hello user\nsay hello to <!username>")
        .expect("parses");
    assert_eq!(file.prompts.len(), 1);
    assert_eq!(title_text(&file, &file.prompts[0]), "hello user");
    let body_kinds: Vec<Kind> = file.prompts[0].body.iter().map(|t| t.kind).collect();
    assert_eq!(body_kinds, vec![Kind::Text, Kind::Var]);
}

#[test]
fn runs_split_at_every_title() {
    let file = parse(
        "pair.prompt",
        ".title hello user\nsay hello to <!username>\n.title goodbye user\nsay goodbye to <!username>",
    )
    .expect("parses");
    assert_eq!(file.prompts.len(), 2);
    assert_eq!(title_text(&file, &file.prompts[0]), "hello user");
    assert_eq!(title_text(&file, &file.prompts[1]), "goodbye user");
}

#[test]
fn untitled_prompt_among_several_fails_with_its_index() {
    let err = parse("bad.prompt", "leading body\n.title second\nmore").unwrap_err();
    assert_eq!(err, AssembleError::MissingTitle { index: 0 });
}

#[test]
fn empty_file_fails_with_no_prompts() {
    let err = parse("empty.prompt", "").unwrap_err();
    assert_eq!(err, AssembleError::NoPrompts);
}

#[test]
fn assemble_reports_first_missing_title_only() {
    // Construct the degenerate sequence directly: body tokens ahead of the
    // first title always surface as index 0.
    let tokens = scan(b"one\n.title a\ntwo");
    let err = assemble(&tokens).map(|_| ()).unwrap_err();
    assert_eq!(err, AssembleError::MissingTitle { index: 0 });
}

#[test]
fn extension_is_stripped_at_the_last_dot() {
    let file = parse("my.file.prompt", "body").expect("parses");
    assert_eq!(file.name, "my.file");
}

#[test]
fn vars_dedupe_in_first_occurrence_order() {
    let file = parse(
        "order.prompt",
        "<!b_name> then <!a_name> then <!b_name> again",
    )
    .expect("parses");
    let (names, total) = file.prompts[0].vars(&file.content, CaseStyle::Camel);
    assert_eq!(names, vec!["bName".to_string(), "aName".to_string()]);
    assert_eq!(total, 10);
}

#[test]
fn vars_dedupe_on_the_converted_identifier() {
    let file = parse("collide.prompt", "<!user_name> and <!userName>").expect("parses");
    let (names, total) = file.prompts[0].vars(&file.content, CaseStyle::Camel);
    assert_eq!(names, vec!["userName".to_string()]);
    assert_eq!(total, 8);
}

#[test]
fn vars_ignores_text_tokens() {
    let file = parse("plain.prompt", "no placeholders here").expect("parses");
    let (names, total) = file.prompts[0].vars(&file.content, CaseStyle::Camel);
    assert!(names.is_empty());
    assert_eq!(total, 0);
}
