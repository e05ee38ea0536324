// Post generation pipeline: source framing, user-prompt templates, and the
// orchestration that ties the prompt core to the LLM call.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod source;
