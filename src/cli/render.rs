//! Shared terminal output helpers for question listings.

use crossterm::{
    execute,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::io;

use crate::core::DatabaseQuestion;
use crate::error::Result;

const HEADER_COLOR: Color = Color::Rgb { r: 255, g: 165, b: 0 };

pub fn output_json(questions: &[DatabaseQuestion]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)
        .map_err(|e| anyhow::anyhow!("failed to serialize output: {e}"))?;
    println!("{}", json);
    Ok(())
}

pub fn output_table(questions: &[DatabaseQuestion]) {
    let _ = execute!(io::stdout(), SetForegroundColor(HEADER_COLOR));
    println!();
    println!("┌──────┬──────────────────────────────────────────────────┬─────────┬─────────┐");
    println!("│ ID   │ Question                                         │ Answers │ Correct │");
    println!("├──────┼──────────────────────────────────────────────────┼─────────┼─────────┤");
    let _ = execute!(io::stdout(), ResetColor);

    for question in questions {
        println!(
            "│ {:>4} │ {} │ {:>7} │ {:>7} │",
            question.id,
            truncate_string(&question.question_text, 48),
            question.answers.len(),
            question.correct_answers.len(),
        );
    }

    let _ = execute!(io::stdout(), SetForegroundColor(HEADER_COLOR));
    println!("└──────┴──────────────────────────────────────────────────┴─────────┴─────────┘");
    let _ = execute!(io::stdout(), ResetColor);
}

pub fn output_detailed(question: &DatabaseQuestion) {
    let _ = execute!(io::stdout(), SetForegroundColor(HEADER_COLOR));
    println!("Question #{}", question.id);
    let _ = execute!(io::stdout(), ResetColor);
    println!("  {}", question.question_text);
    println!("  Answers:");
    for answer in &question.answers {
        let marker = if question.correct_answers.contains(answer) {
            "✓"
        } else {
            " "
        };
        println!("   {} {}", marker, answer);
    }
}

fn truncate_string(s: &str, max_len: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let visual_width = s.width();
    if visual_width <= max_len {
        // Pad with spaces to reach max_len visual width
        let padding = max_len - visual_width;
        format!("{}{}", s, " ".repeat(padding))
    } else {
        // Truncate by characters until we fit within the visual width
        let mut truncated = String::new();
        let mut current_width = 0;

        for ch in s.chars() {
            let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if current_width + ch_width + unicode_width::UnicodeWidthChar::width('…').unwrap_or(1) > max_len {
                break;
            }
            truncated.push(ch);
            current_width += ch_width;
        }

        // Add ellipsis and pad to exact width
        truncated.push('…');
        current_width += unicode_width::UnicodeWidthChar::width('…').unwrap_or(1);
        let padding = max_len - current_width;
        format!("{}{}", truncated, " ".repeat(padding))
    }
}
