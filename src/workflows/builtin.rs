//! Built-in workflows.

use super::definition::WorkflowDefinition;

const CODE_REVIEW_PROMPT: &str = "You are a meticulous code reviewer. Point out bugs, \
unclear naming and missing error handling. Group findings by severity and quote the \
lines you refer to.";

const EXPLAIN_CODE_PROMPT: &str = "Explain what the given code does, step by step, for a \
developer new to the codebase. Call out non-obvious control flow and side effects.";

const WRITE_TESTS_PROMPT: &str = "Write focused unit tests for the given code using the \
project's existing test framework. Cover edge cases and failure paths, not just the \
happy path.";

const SUMMARIZE_PROMPT: &str = "Summarize the given text in a few short bullet points. \
Keep names, numbers and decisions; drop filler.";

const TRANSLATE_PROMPT: &str = "Translate the given text into the requested language. \
Preserve formatting, code blocks and proper nouns.";

/// Workflows available out of the box.
pub fn builtin_workflows() -> Vec<WorkflowDefinition> {
    vec![
        WorkflowDefinition::new(
            "code-review",
            "Code Review",
            "Review code for bugs and style issues",
        )
        .with_system_prompt(CODE_REVIEW_PROMPT)
        .with_tools(&["read_file"])
        .with_category("code"),
        WorkflowDefinition::new(
            "explain-code",
            "Explain Code",
            "Walk through what a piece of code does",
        )
        .with_system_prompt(EXPLAIN_CODE_PROMPT)
        .with_category("code"),
        WorkflowDefinition::new("write-tests", "Write Tests", "Generate unit tests for code")
            .with_system_prompt(WRITE_TESTS_PROMPT)
            .with_tools(&["read_file"])
            .with_category("code"),
        WorkflowDefinition::new("summarize", "Summarize", "Condense long text into key points")
            .with_system_prompt(SUMMARIZE_PROMPT)
            .with_category("writing"),
        WorkflowDefinition::new("translate", "Translate", "Translate text between languages")
            .with_system_prompt(TRANSLATE_PROMPT)
            .with_category("writing"),
    ]
}
