pub mod lorem_ipsum;
pub mod password_generator;
pub mod uuid_generator;

pub use lorem_ipsum::LoremIpsumTool;
pub use password_generator::PasswordGeneratorTool;
pub use uuid_generator::UuidGeneratorTool;
