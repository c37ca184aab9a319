use crate::language::{is_supported, language_code_to_name, normalize_code};
use crate::options::EnhancementOptions;
use console::style;
use dialoguer::{Confirm, Input};

/// Ask for the enhancement options, re-prompting until both codes are valid.
pub fn run_options_wizard(defaults: &EnhancementOptions) -> anyhow::Result<EnhancementOptions> {
    print_header();

    let source_language = prompt_language(
        "Enter source file language (e.g. zh-cn)",
        &defaults.source_language,
        "Source",
    )?;
    let target_language = prompt_language(
        "Enter target language (e.g. en)",
        &defaults.target_language,
        "Target",
    )?;

    let include_source = Confirm::new()
        .with_prompt("Add source to output?")
        .default(defaults.include_source)
        .interact()?;

    let include_vocabulary = Confirm::new()
        .with_prompt("Generate vocabulary list?")
        .default(defaults.include_vocabulary)
        .interact()?;

    let options = EnhancementOptions::new(
        &source_language,
        &target_language,
        include_source,
        include_vocabulary,
    )?;

    print_summary(&options);

    if !Confirm::new()
        .with_prompt("Start processing?")
        .default(true)
        .interact()?
    {
        anyhow::bail!("No options selected. Exiting.");
    }

    println!();
    Ok(options)
}

fn print_header() {
    println!();
    println!(
        "{}",
        style("╔═══════════════════════════════════════════════════╗").cyan()
    );
    println!(
        "{}",
        style("║        subgloss - SRT Batch Processor Options     ║").cyan()
    );
    println!(
        "{}",
        style("╚═══════════════════════════════════════════════════╝").cyan()
    );
    println!();
}

fn prompt_language(prompt: &str, default: &str, role: &str) -> anyhow::Result<String> {
    let role = role.to_string();
    let code: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(move |input: &String| -> Result<(), String> {
            let code = normalize_code(input);
            if is_supported(&code) {
                Ok(())
            } else {
                Err(format!("{} language code '{}' is not valid.", role, code))
            }
        })
        .interact_text()?;
    Ok(normalize_code(&code))
}

fn print_summary(options: &EnhancementOptions) {
    println!("\n{}", style("═══ Summary ═══").bold());
    println!("  Source:      {}", describe(&options.source_language));
    println!("  Target:      {}", describe(&options.target_language));
    println!("  Keep source: {}", yes_no(options.include_source));
    println!("  Vocabulary:  {}", yes_no(options.include_vocabulary));
    println!();
}

fn describe(code: &str) -> String {
    format!("{} ({})", language_code_to_name(code), code)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe("en"), "English (en)");
        assert_eq!(describe("zh-cn"), "Simplified Chinese (zh-cn)");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "yes");
        assert_eq!(yes_no(false), "no");
    }
}
