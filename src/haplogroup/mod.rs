pub mod frequency;
pub mod label;
pub mod resolver;

pub use label::{AscentStrategy, Chromosome, HaplogroupLabel};
pub use resolver::{resolve, Resolution, ResolverConfig, SearchOutcome, Termination};
