use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

pub fn render_config() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightGreen),
        answer: StyleSheet::new().with_fg(Color::LightGreen),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_banner() {
    println!();
    println!(
        "  {}  {}",
        style("🔎").green(),
        style("repolens").green().bold()
    );
    println!("  {}", style("LLM-assisted project analysis").dim());
    println!();
}

pub fn print_success(message: &str) {
    println!("  {} {}", style("✓").green(), message);
}

pub fn print_error(message: &str) {
    println!("  {} {}", style("✗").red(), message);
}
