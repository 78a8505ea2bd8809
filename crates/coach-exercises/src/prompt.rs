//! Exercise prompt template.

use crate::ExerciseRecord;

/// Closing request appended to every exercise prompt.
pub const INSTRUCTION_LINE: &str =
    "Please solve the exercise above. Follow the rules when writing the code, and explain why you made each choice.";

/// Render the prompt sent to the model when an exercise is selected.
///
/// Every field of `record` and the `tier` label appear verbatim.
pub fn render_prompt(tier: &str, record: &ExerciseRecord) -> String {
    format!(
        "[Exercise: {title}]\n\
         \n\
         Tier: {tier}\n\
         \n\
         Description:\n\
         {description}\n\
         \n\
         Example:\n\
         {example}\n\
         \n\
         Hint:\n\
         {hint}\n\
         \n\
         ---\n\
         {INSTRUCTION_LINE}",
        title = record.title,
        description = record.description,
        example = record.example,
        hint = record.hint,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_layout() {
        let record = ExerciseRecord::new("Pointers", "D", "E", "H");
        let prompt = render_prompt("beginner", &record);
        assert!(prompt.starts_with("[Exercise: Pointers]\n\nTier: beginner\n"));
        assert!(prompt.contains("Description:\nD\n"));
        assert!(prompt.contains("Example:\nE\n"));
        assert!(prompt.contains("Hint:\nH\n"));
        assert!(prompt.ends_with(INSTRUCTION_LINE));
    }

    #[test]
    fn multiline_fields_are_kept_verbatim() {
        let example = "int main() {\n    return 0;\n}";
        let record = ExerciseRecord::new("Entry point", "Write main.", example, "{ braces }");
        let prompt = render_prompt("late-beginner", &record);
        assert!(prompt.contains(example));
        assert!(prompt.contains("{ braces }"));
    }
}
