//! Text generation

mod provider;

pub use provider::Generator;

#[cfg(test)]
pub use provider::mock::MockGenerator;
