/// Animation types the server understands, in the order the page declares them.
pub const ANIMATION_TYPES: &[&str] = &[
    "pulsing", "slidein", "bounce", "blur", "rotate", "popup", "flash",
];

/// Value used when the user never picked an option: the first declared one.
pub fn default_option(options: &[String]) -> Option<&str> {
    options.first().map(String::as_str)
}

/// Single-choice state over a set of mutually exclusive options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionGroup {
    options: Vec<String>,
    selected: Option<usize>,
}

impl SelectionGroup {
    /// Declares the options in order. Blank and repeated ids are dropped.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut declared: Vec<String> = Vec::new();
        for option in options {
            let option = option.into().trim().to_string();
            if !option.is_empty() && !declared.contains(&option) {
                declared.push(option);
            }
        }
        Self {
            options: declared,
            selected: None,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Marks `option_id` as the only selected option.
    ///
    /// Undeclared ids are ignored. Returns true when the selection changed.
    pub fn select(&mut self, option_id: &str) -> bool {
        let Some(index) = self.options.iter().position(|o| o == option_id) else {
            return false;
        };
        let changed = self.selected != Some(index);
        self.selected = Some(index);
        changed
    }

    /// True once the user made an explicit, valid choice.
    pub fn has_explicit_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// The selected option, falling back to the first declared one.
    pub fn current_value(&self) -> Option<&str> {
        match self.selected {
            Some(index) => self.options.get(index).map(String::as_str),
            None => default_option(&self.options),
        }
    }

    /// Whether `option_id` is the option that should carry the selected mark.
    pub fn is_marked(&self, option_id: &str) -> bool {
        self.current_value() == Some(option_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_group_has_no_value() {
        let group = SelectionGroup::new(Vec::<String>::new());
        assert_eq!(group.current_value(), None);
        assert!(!group.is_marked("pulsing"));
    }

    #[test]
    fn blank_and_duplicate_options_are_dropped() {
        let group = SelectionGroup::new(["bounce", " ", "bounce", "blur"]);
        assert_eq!(group.options(), ["bounce".to_string(), "blur".to_string()]);
    }

    #[test]
    fn reselecting_same_option_is_not_a_change() {
        let mut group = SelectionGroup::new(ANIMATION_TYPES.iter().copied());
        assert!(group.select("rotate"));
        assert!(!group.select("rotate"));
        assert!(group.has_explicit_selection());
    }
}
