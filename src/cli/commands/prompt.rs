use anyhow::Result;

use crate::cli::PostArgs;
use crate::post::{ComposedPrompt, compose};
use crate::ui::Style;

/// Prints the composed prompts for the given post options.
pub fn print_prompt(post: &PostArgs) -> Result<()> {
    let request = post.to_post_request()?;
    println!("{}", render(&compose(&request)));
    Ok(())
}

fn render(prompt: &ComposedPrompt) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        Style::header("System prompt:"),
        prompt.system,
        Style::header("User prompt:"),
        prompt.user
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_both_prompts() {
        let prompt = ComposedPrompt {
            system: "persona".to_string(),
            user: "task".to_string(),
        };

        let rendered = render(&prompt);

        assert!(rendered.contains("System prompt:"));
        assert!(rendered.contains("persona"));
        assert!(rendered.contains("User prompt:"));
        assert!(rendered.find("persona") < rendered.find("task"));
    }
}
