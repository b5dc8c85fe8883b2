//! Generator implementations

mod factory;
mod gemini;
mod openai;

pub use factory::GeneratorFactory;
pub use gemini::GeminiGenerator;
pub use openai::OpenAiGenerator;
