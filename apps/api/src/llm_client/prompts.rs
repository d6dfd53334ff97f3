// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Opening instruction that asks for bare JSON output.
pub const JSON_ONLY_INSTRUCTION: &str =
    "respond ONLY with valid JSON (no markdown, no backticks).";

/// Closing reminder appended after the schema.
pub const JSON_ONLY_REMINDER: &str = "Return only JSON.";
