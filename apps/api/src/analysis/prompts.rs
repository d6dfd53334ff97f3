// Prompt for the resume analysis call.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, JSON_ONLY_REMINDER};

/// Builds the analysis prompt. Both inputs are embedded verbatim.
pub fn build_analysis_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        r#"
Analyze this resume against the job description and {JSON_ONLY_INSTRUCTION}

Very important:
- Try your best to extract the candidate's FULL NAME from the header/contact section of the resume.
- Try your best to extract the candidate's EMAIL from the resume; do not invent one.
- If a field truly does not exist, return an empty string "" for that field, not "N/A".

Resume:
{resume_text}

Job Description:
{job_description}

Respond with this exact JSON format:
{{
  "score": <number 0-100>,
  "name": "<full candidate name or empty string>",
  "email": "<email address or empty string>",
  "experience": "<years/level, e.g. 'Fresher', '2-3 years', 'Senior'>",
  "skills": ["skill1", "skill2", "skill3"],
  "matching_skills": ["skill1", "skill2"],
  "missing_skills": ["skill1", "skill2"],
  "summary": "<2-3 sentence summary>"
}}

Score: 75-100=Excellent, 50-74=Good, 0-49=Poor.
{JSON_ONLY_REMINDER}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_inputs_verbatim() {
        let resume = "Jane Doe\njane@example.com\n{job_description} literally";
        let jd = "Senior Rust engineer, {resume_text} in braces";
        let prompt = build_analysis_prompt(resume, jd);
        assert!(prompt.contains(resume));
        assert!(prompt.contains(jd));
        assert!(prompt.find(resume).unwrap() < prompt.find(jd).unwrap());
    }

    #[test]
    fn test_prompt_lists_every_result_key() {
        let prompt = build_analysis_prompt("", "Backend developer");
        for key in [
            "\"score\"",
            "\"name\"",
            "\"email\"",
            "\"experience\"",
            "\"skills\"",
            "\"matching_skills\"",
            "\"missing_skills\"",
            "\"summary\"",
        ] {
            assert!(prompt.contains(key), "prompt is missing {key}");
        }
    }

    #[test]
    fn test_prompt_carries_rubric_and_json_instructions() {
        let prompt = build_analysis_prompt("resume", "jd");
        assert!(prompt.contains("75-100=Excellent, 50-74=Good, 0-49=Poor"));
        assert!(prompt.contains(JSON_ONLY_INSTRUCTION));
        assert!(prompt.trim_end().ends_with(JSON_ONLY_REMINDER));
    }
}
