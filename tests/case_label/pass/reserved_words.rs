use case_labeled::CaseLabeled;

#[allow(non_camel_case_types)]
#[derive(CaseLabeled)]
enum Keyword {
    r#type,
    r#match(String),
    r#const { value: i32 },
}

fn main() {
    assert_eq!(Keyword::r#type.case_label(), KeywordLabel::r#type);
    assert!(Keyword::r#match(String::new()).label_eq(&Keyword::r#match("x".to_string())));
    assert!(Keyword::r#const { value: 1 } == KeywordLabel::r#const);
    assert!(!Keyword::r#type.label_eq(&Keyword::r#const { value: 0 }));
}
