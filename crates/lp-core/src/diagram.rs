//! Architecture diagram source cleanup.

/// Strip Markdown code fences (```` ```mermaid ```` / ```` ``` ````) from
/// diagram source so it can be fed straight to a renderer.
#[must_use]
pub fn strip_code_fences(source: &str) -> String {
    source
        .trim()
        .replace("```mermaid", "")
        .replace("```", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mermaid_fence() {
        let src = "```mermaid\ngraph TD\n  A-->B\n```\n";
        assert_eq!(strip_code_fences(src), "graph TD\n  A-->B");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\nflowchart LR\n```"), "flowchart LR");
    }

    #[test]
    fn leaves_plain_source_untouched() {
        assert_eq!(strip_code_fences("graph TD; A-->B"), "graph TD; A-->B");
    }
}
