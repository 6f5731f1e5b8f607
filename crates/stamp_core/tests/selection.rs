use stamp_core::{default_option, SelectionGroup, ANIMATION_TYPES};

fn marked(group: &SelectionGroup) -> Vec<&str> {
    group
        .options()
        .iter()
        .map(String::as_str)
        .filter(|option| group.is_marked(option))
        .collect()
}

#[test]
fn first_declared_option_is_the_implicit_default() {
    let group = SelectionGroup::new(ANIMATION_TYPES.iter().copied());
    assert!(!group.has_explicit_selection());
    assert_eq!(group.current_value(), Some("pulsing"));
    assert_eq!(default_option(group.options()), Some("pulsing"));
    assert_eq!(marked(&group), vec!["pulsing"]);
}

#[test]
fn exactly_one_option_tracks_the_last_valid_select() {
    let mut group = SelectionGroup::new(ANIMATION_TYPES.iter().copied());
    let clicks = ["bounce", "nope", "flash", "", "blur", "PULSING", "popup", "popup"];

    let mut last_valid = "pulsing";
    for click in clicks {
        if ANIMATION_TYPES.contains(&click) {
            last_valid = click;
        }
        group.select(click);
        assert_eq!(marked(&group), vec![last_valid]);
        assert_eq!(group.current_value(), Some(last_valid));
    }
}

#[test]
fn invalid_select_on_fresh_group_keeps_default() {
    let mut group = SelectionGroup::new(["slidein", "rotate"]);
    assert!(!group.select("flash"));
    assert!(!group.has_explicit_selection());
    assert_eq!(group.current_value(), Some("slidein"));
}
