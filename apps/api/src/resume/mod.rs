// Resume pipeline: upload → parse → extract → clean → rewrite.
// All provider traffic goes through parser_client / llm_client — no direct HTTP here.

pub mod extract;
pub mod handlers;
pub mod highlights;
pub mod rewrite;
