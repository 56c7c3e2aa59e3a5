use crate::models::CompetitorContext;

pub fn generate_analysis_prompt(
    domain: &str,
    persona: &str,
    competitor: &CompetitorContext,
) -> String {
    format!(
        r#"Analyze the domain '{}' for the target persona '{}'.
Competitor Context: {}.
Provide a JSON response with these keys: "gap_analysis", "hook_strategy", "keyword_opportunity".
Return ONLY the raw, valid JSON object."#,
        domain, persona, competitor
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_inputs_and_output_contract() {
        let prompt = generate_analysis_prompt(
            "example.com",
            "budget traveler",
            &CompetitorContext::Title("Cheap Flights".to_string()),
        );

        assert!(prompt.contains("'example.com'"));
        assert!(prompt.contains("'budget traveler'"));
        assert!(prompt.contains("Competitor Context: Competitor's Page Title: Cheap Flights."));
        for key in ["\"gap_analysis\"", "\"hook_strategy\"", "\"keyword_opportunity\""] {
            assert!(prompt.contains(key), "missing {key}");
        }
        assert!(prompt.ends_with("Return ONLY the raw, valid JSON object."));
    }

    #[test]
    fn prompt_reports_missing_competitor() {
        let prompt = generate_analysis_prompt("a.com", "p", &CompetitorContext::NotProvided);
        assert!(prompt.contains("Competitor Context: No competitor data provided."));
    }
}
