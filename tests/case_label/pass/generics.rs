use case_labeled::CaseLabeled;

#[derive(CaseLabeled)]
enum Fetch<T, E> {
    Pending,
    Ready(T),
    Failed { error: E },
}

#[derive(CaseLabeled)]
enum Token<'a> {
    Eof,
    Word(&'a str),
}

fn main() {
    let ready: Fetch<u8, String> = Fetch::Ready(7);
    let failed: Fetch<u8, String> = Fetch::Failed {
        error: "boom".to_string(),
    };

    assert_eq!(ready.case_label(), FetchLabel::Ready);
    assert!(!ready.label_eq(&failed));
    assert!(failed == FetchLabel::Failed);
    assert!(FetchLabel::Pending == Fetch::<u8, String>::Pending);

    assert_eq!(Token::Word("word").case_label(), TokenLabel::Word);
    assert!(Token::Eof.label_eq(&Token::Eof));
}
