use case_labeled::CaseLabeled;

#[derive(CaseLabeled)]
#[allow(dead_code)]
struct NotAnEnum;

fn main() {}
