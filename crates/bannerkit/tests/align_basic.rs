use bannerkit::Alignment;
use pretty_assertions::assert_eq;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn left_is_identity() {
    let input = lines(&["AAAA", "B", ""]);
    assert_eq!(Alignment::Left.normalize(&input), input);
}

#[test]
fn empty_input_is_unchanged() {
    assert!(Alignment::Center.normalize(&[]).is_empty());
    assert!(Alignment::Right.normalize(&[]).is_empty());
}

#[test]
fn center_pads_to_longest_line_extra_on_right() {
    let out = Alignment::Center.normalize(&lines(&["AAAA", "B"]));
    assert_eq!(out, lines(&["AAAA", " B  "]));
}

#[test]
fn center_splits_even_padding_evenly() {
    let out = Alignment::Center.normalize(&lines(&["AAAAAA", "BB"]));
    assert_eq!(out, lines(&["AAAAAA", "  BB  "]));
}

#[test]
fn center_leaves_equal_width_lines_unchanged() {
    let input = lines(&["AA", "BB"]);
    assert_eq!(Alignment::Center.normalize(&input), input);
}

#[test]
fn right_left_pads_to_longest_line() {
    let out = Alignment::Right.normalize(&lines(&["AAAA", "B", "CC"]));
    assert_eq!(out, lines(&["AAAA", "   B", "  CC"]));
}

#[test]
fn padded_lines_share_the_reference_width() {
    let input = lines(&["A", "BBB", "CCCCC", ""]);
    for mode in [Alignment::Center, Alignment::Right] {
        let out = mode.normalize(&input);
        assert!(out.iter().all(|line| line.chars().count() == 5));
    }
}

#[test]
fn content_survives_as_contiguous_substring() {
    let input = lines(&["AB", "CDEF"]);
    for mode in [Alignment::Center, Alignment::Right] {
        for (line, original) in mode.normalize(&input).iter().zip(&input) {
            assert!(line.contains(original.as_str()));
            assert_eq!(line.trim_end().trim_start(), original);
        }
    }
}

#[test]
fn unknown_names_fall_back_to_left() {
    assert_eq!(Alignment::from_name("center"), Alignment::Center);
    assert_eq!(Alignment::from_name("right"), Alignment::Right);
    assert_eq!(Alignment::from_name("left"), Alignment::Left);
    assert_eq!(Alignment::from_name("justify"), Alignment::Left);
    assert_eq!(Alignment::from_name(""), Alignment::Left);
}
