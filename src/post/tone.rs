//! Preset tone labels offered by the post form.

use crate::ui::Style;

/// Tone labels shown as choices in the generator form.
///
/// Tones are free text; these are suggestions, not a closed set.
pub const TONE_PRESETS: &[(&str, &str)] = &[
    ("Professional", "Polished and business-appropriate"),
    ("Casual", "Relaxed, everyday voice"),
    ("Friendly", "Warm and approachable"),
    ("Humorous", "Light-hearted with a joke or two"),
    ("Formal", "Reserved and precise"),
    ("Informative", "Fact-first, teaches something"),
    ("Persuasive", "Builds a case and asks for action"),
    ("Enthusiastic", "High energy and excited"),
];

/// Prints all preset tones to stdout.
pub fn print_tones() {
    println!("{}", Style::header("Preset tones"));
    for (tone, description) in TONE_PRESETS {
        println!("  {:14} {}", Style::code(tone), Style::secondary(description));
    }
    println!();
    println!(
        "{}",
        Style::hint("Any other label works too; it is passed to the model lower-cased.")
    );
}
