use crate::types::AnalysisInput;

/// Build the single-turn analyst prompt.
///
/// States the analyst persona, embeds the four inputs verbatim, and spells
/// out the three-part task plus the exact JSON shape the caller parses.
pub(crate) fn build_prompt(input: &AnalysisInput<'_>) -> String {
    let comments = if input.comments.is_empty() {
        "No comments"
    } else {
        input.comments
    };

    format!(
        r#"You are a professional startup idea analyst. Analyze the following user complaint / pain point from Reddit r/{subreddit} and devise a promising AI product to solve it.

Post title: "{title}"
Post body: "{text}"
User comments: "{comments}"

Tasks:
1. Summarize the user's core pain point.
2. Devise an AI product solution for that pain point.
3. Assign a viability score (0-100).

Return the analysis strictly as JSON, with no markdown formatting or any other text. The JSON structure is:
{{
  "product_name": "short, punchy product name",
  "tagline": "one-sentence tagline",
  "viability_score": number between 0 and 100,
  "core_pain_point": "description of the core pain point",
  "solution": "detailed description of the product solution",
  "monetization": "business model suggestion"
}}"#,
        subreddit = input.subreddit,
        title = input.title,
        text = input.text,
        comments = comments,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input<'a>() -> AnalysisInput<'a> {
        AnalysisInput {
            title: "I hate tracking receipts",
            text: "shoebox full of paper every tax season",
            subreddit: "smallbusiness",
            comments: "same\n---\nme too",
        }
    }

    #[test]
    fn prompt_embeds_all_inputs() {
        let prompt = build_prompt(&sample_input());
        assert!(prompt.contains("I hate tracking receipts"));
        assert!(prompt.contains("shoebox full of paper"));
        assert!(prompt.contains("r/smallbusiness"));
        assert!(prompt.contains("me too"));
    }

    #[test]
    fn prompt_spells_out_the_required_schema() {
        let prompt = build_prompt(&sample_input());
        for field in [
            "product_name",
            "tagline",
            "viability_score",
            "core_pain_point",
            "solution",
            "monetization",
        ] {
            assert!(prompt.contains(field), "schema field missing: {field}");
        }
    }

    #[test]
    fn empty_comments_fall_back_to_placeholder() {
        let input = AnalysisInput {
            comments: "",
            ..sample_input()
        };
        let prompt = build_prompt(&input);
        assert!(prompt.contains(r#"User comments: "No comments""#));
    }
}
