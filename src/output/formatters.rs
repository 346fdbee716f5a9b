//! Formatting utilities for terminal output

/// Gallows drawings, from no strikes to a full figure
const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows drawing for `strikes` out of `max_strikes`
///
/// The figure is scaled so that the last stage is drawn exactly when the strike
/// limit is reached, whatever that limit is.
#[must_use]
pub fn gallows(strikes: u32, max_strikes: u32) -> &'static str {
    let last = GALLOWS.len() - 1;
    let max_strikes = max_strikes.max(1);
    let stage = if strikes >= max_strikes {
        last
    } else {
        (strikes as usize * last) / max_strikes as usize
    };
    GALLOWS[stage]
}

/// Guess view with letters separated by spaces and uppercased, e.g. `_ A _ E`
#[must_use]
pub fn spaced_view(view: &str) -> String {
    view.chars()
        .map(|c| if c == '-' { '_' } else { c.to_ascii_uppercase() })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Letters as a comma-separated list
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "none".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Strikes used as a bar, e.g. `███░░░`
#[must_use]
pub fn strike_bar(strikes: u32, max_strikes: u32) -> String {
    create_progress_bar(
        f64::from(strikes),
        f64::from(max_strikes.max(1)),
        max_strikes.max(1) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallows_stages_with_default_limit() {
        assert_eq!(gallows(0, 6), GALLOWS[0]);
        assert_eq!(gallows(3, 6), GALLOWS[3]);
        assert_eq!(gallows(6, 6), GALLOWS[6]);
        assert_eq!(gallows(9, 6), GALLOWS[6]);
    }

    #[test]
    fn gallows_scales_to_short_limits() {
        assert_eq!(gallows(0, 2), GALLOWS[0]);
        assert_eq!(gallows(1, 2), GALLOWS[3]);
        assert_eq!(gallows(2, 2), GALLOWS[6]);
    }

    #[test]
    fn spaced_view_formatting() {
        assert_eq!(spaced_view("-a-e"), "_ A _ E");
        assert_eq!(spaced_view(""), "");
    }

    #[test]
    fn letter_list_formatting() {
        assert_eq!(letter_list(&[]), "none");
        assert_eq!(letter_list(&['a', 'q']), "a, q");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn strike_bar_matches_limit() {
        assert_eq!(strike_bar(2, 6), "██░░░░");
        assert_eq!(strike_bar(6, 6), "██████");
    }
}
