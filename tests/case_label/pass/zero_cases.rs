use case_labeled::CaseLabeled;

// An enum without cases expands to nothing: no label type, no accessor,
// no conformance. This file only has to compile.
#[allow(dead_code)]
#[derive(CaseLabeled)]
enum Uninhabited {}

fn main() {}
