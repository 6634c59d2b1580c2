// Prompt constants for the completions client.
// The rewrite instruction lives here, next to the client that sends it.

/// Instruction prepended to every highlight rewrite request. The highlight
/// text is appended directly after the trailing "Bullet point: " marker.
pub const REWRITE_PROMPT: &str = "Rewrite this resume bullet point to make it sound \
    more exciting and impactful by using more powerful verbs and highlighting key \
    quantitative results and tools that were used. Don't use any pronouns and write \
    everything in the past tense.\n\nBullet point: ";
