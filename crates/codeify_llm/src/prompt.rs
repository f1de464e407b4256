//! Prompt builder: review and fix prompts.

use codeify_core::Language;

/// Senior-review prompt. Free-form markdown reply, rendered as-is.
pub fn review_prompt(language: Language, code: &str) -> String {
    format!(
        "You are an expert-level software developer, skilled in writing efficient, clean, and advanced code.\n\
I’m sharing a piece of code written in {value}.\n\
Your job is to deeply review this code and provide the following:\n\
\n\
1️⃣ A quality rating: Better, Good, Normal, or Bad.\n\
2️⃣ Detailed suggestions for improvement, including best practices and advanced alternatives.\n\
3️⃣ A clear explanation of what the code does, step by step.\n\
4️⃣ A list of any potential bugs or logical errors, if found.\n\
5️⃣ Identification of syntax errors or runtime errors, if present.\n\
6️⃣ Solutions and recommendations on how to fix each identified issue.\n\
\n\
Analyze it like a senior developer reviewing a pull request.\n\
\n\
Code: {code}",
        value = language.value(),
    )
}

/// Fix prompt. Asks for a single JSON object with `correctedCode` and
/// `explanation`; the reply goes through the extractor.
pub fn fix_prompt(language: Language, code: &str) -> String {
    format!(
        "You are an expert developer. Fix the given code so it runs and follows best practices.\n\
Return a single JSON object ONLY with these fields:\n\
{{\n\
  \"correctedCode\": \"<the complete corrected source code string>\",\n\
  \"explanation\": \"<concise explanation of fixes and why they are needed>\"\n\
}}\n\
Wrap the JSON in a single code block if possible. Do not return extra commentary outside the JSON block.\n\
\n\
Language: {label}\n\
Code:\n\
```\n\
{code}\n\
```",
        label = language.label(),
    )
}
