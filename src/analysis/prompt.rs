/*!
 * Prompt construction for title analysis.
 */

/// Maximum number of content characters included in a prompt.
///
/// Hard cap to bound token usage; anything past it is dropped.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// Build the instruction prompt for the model.
///
/// Instruction fragments are joined with single spaces and followed by the
/// document content, truncated to its first [`MAX_CONTENT_CHARS`] characters.
/// The content is included verbatim, without escaping.
pub fn build_prompt(content: &str, include_date: bool, date_format: &str, separator: &str) -> String {
    let mut prompt_parts = vec![
        "Analyze the following document content and provide a meaningful, concise title for it."
            .to_string(),
        format!(
            "The title MUST be in lowercase using '{}' as a separator.",
            separator
        ),
    ];

    if include_date {
        prompt_parts.push(format!(
            "If the document contains a specific relevant date (like an invoice date, meeting date, etc.), \
             include it at the END of the title in {} format. \
             If no date is found, end the title with 'NODATE' as a marker.",
            date_format
        ));
    }

    prompt_parts.push("Return ONLY the title, nothing else.\n\n".to_string());
    prompt_parts.push(content.chars().take(MAX_CONTENT_CHARS).collect());

    prompt_parts.join(" ")
}
