use std::collections::HashSet;

use case_labeled::{CaseLabeled, CaseList};

#[derive(CaseLabeled)]
enum Direction {
    North,
    East(u8),
    South { depth: u8 },
    West,
}

fn assert_send_sync<T: Send + Sync>() {}

fn main() {
    assert_eq!(
        DirectionLabel::ALL,
        [
            DirectionLabel::North,
            DirectionLabel::East,
            DirectionLabel::South,
            DirectionLabel::West,
        ]
    );

    let mut labels = HashSet::new();
    labels.insert(Direction::East(1).case_label());
    labels.insert(Direction::East(2).case_label());
    assert_eq!(labels.len(), 1);

    assert_send_sync::<DirectionLabel>();
}
