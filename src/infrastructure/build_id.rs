//! Random build id generation

use rand::Rng;

use crate::domain::ports::BuildIdGenerator;
use crate::domain::value_objects::BuildId;

/// Draws a fresh 32-bit id from the thread RNG for every call
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomBuildIdGenerator;

impl RandomBuildIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl BuildIdGenerator for RandomBuildIdGenerator {
    fn generate(&self) -> BuildId {
        BuildId::from_u32(rand::thread_rng().gen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_valid() {
        let generator = RandomBuildIdGenerator::new();
        for _ in 0..32 {
            let id = generator.generate();
            assert!(BuildId::parse(id.as_str()).is_ok(), "{id}");
        }
    }
}
