mod api {
    use case_labeled::CaseLabeled;

    #[derive(CaseLabeled)]
    pub enum Status {
        Idle,
        Busy(u32),
    }

    #[derive(CaseLabeled)]
    pub(crate) enum Internal {
        On,
        Off,
    }
}

fn main() {
    use api::{Status, StatusLabel};

    assert_eq!(Status::Busy(3).case_label(), StatusLabel::Busy);
    assert_eq!(api::Internal::On.case_label(), api::InternalLabel::On);
}
