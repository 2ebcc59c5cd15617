//! Instruction templates sent to the inference service.

/// Character budget for each comment in a plain source file.
pub const SOURCE_COMMENT_LIMIT: usize = 100;
/// Character budget for each comment line in a notebook cell.
pub const CELL_COMMENT_LIMIT: usize = 200;

pub fn source_prompt(code: &str) -> String {
    format!(
        "Analyze this Python code and provide concise comments. Follow these rules strictly:
1. Keep each comment under {limit} characters
2. Use simple, clear language
3. Focus on the most important aspects only
4. Add comments only for key lines or blocks
5. Skip obvious or self-explanatory code

Code to analyze:
{code}
",
        limit = SOURCE_COMMENT_LIMIT,
        code = code,
    )
}

pub fn notebook_cell_prompt(code: &str) -> String {
    format!(
        "Analyze this Python code and provide comments between the python code provided, \
written from a point of view where learning and understanding is the most important thing.
Follow these rules strictly:
1. If an explanation is longer than {limit} characters, split it into multiple lines
2. Each comment line MUST NOT exceed {limit} characters
3. Use '# Part X:' prefix for split comments (e.g., '# Part 1: First part of explanation')
4. Focus on explaining complex logic and important concepts
5. Use clear and concise language
6. Format multi-line comments like this:
# Part 1: First part of the long explanation...
# Part 2: Continuation of the explanation...

Code to analyze:
{code}
",
        limit = CELL_COMMENT_LIMIT,
        code = code,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_code_and_limits() {
        let source = source_prompt("x = 1");
        assert!(source.contains("under 100 characters"));
        assert!(source.ends_with("Code to analyze:\nx = 1\n"));

        let cell = notebook_cell_prompt("df.head()");
        assert!(cell.contains("MUST NOT exceed 200 characters"));
        assert!(cell.contains("'# Part X:'"));
        assert!(cell.ends_with("Code to analyze:\ndf.head()\n"));
    }
}
