//! Generator variant registry.
//!
//! Lists every generator the driver can measure, in the fixed order the
//! benchmark runs and reports them.

use crate::error::{ConfigError, SeedError};
use crate::random::mt19937::{self, MtRand};
#[cfg(c_implementation_active)]
use crate::random::mt19937::MtRandC;
use crate::random::mt19937x16::{self, Avx512Rand};
use crate::random::sfmt::{self, SfmtRand};
use crate::random::{EntropySource, Generator};
use crate::utils::bench::average_of;

/// Construct a generator and return the mean of `samples` values.
pub type RunFn = fn(u64, &mut dyn EntropySource) -> Result<f64, SeedError>;

/// One generator the driver can measure
pub struct GeneratorVariant {
    /// Identifier used on the command line (e.g., "sfmt19937")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Checkpoint label recorded after the run
    pub label: &'static str,
    pub run: RunFn,
}

/// Seed, run and drop one generator. The instance lives for exactly one pass.
fn run_generator<G: Generator>(samples: u64, entropy: &mut dyn EntropySource) -> Result<f64, SeedError> {
    let mut generator = G::from_entropy(entropy)?;
    Ok(average_of(&mut generator, samples))
}

/// Registry of all generator variants
pub struct VariantRegistry {
    variants: Vec<GeneratorVariant>,
}

impl VariantRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            variants: Vec::new(),
        }
    }

    /// Register a variant; run order is registration order
    pub fn register(&mut self, variant: GeneratorVariant) {
        self.variants.push(variant);
    }

    /// Get all registered variants
    pub fn all(&self) -> &[GeneratorVariant] {
        &self.variants
    }

    /// Find variant by name
    pub fn find(&self, name: &str) -> Option<&GeneratorVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// List variant names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.name).collect()
    }

    /// Variants selected by name, kept in registry order. An empty filter
    /// selects everything.
    pub fn select(&self, names: &[String]) -> Result<Vec<&GeneratorVariant>, ConfigError> {
        if let Some(unknown) = names.iter().find(|n| self.find(n).is_none()) {
            return Err(ConfigError::UnknownVariant(unknown.clone()));
        }
        Ok(self
            .variants
            .iter()
            .filter(|v| names.is_empty() || names.iter().any(|n| n == v.name))
            .collect())
    }
}

impl Default for VariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all generators
pub fn build_registry() -> VariantRegistry {
    let mut registry = VariantRegistry::new();

    registry.register(GeneratorVariant {
        name: MtRand::NAME,
        description: "MT19937, 8 entropy words expanded through a seed sequence",
        label: "MT19937 engine",
        run: run_generator::<MtRand>,
    });
    registry.register(GeneratorVariant {
        name: SfmtRand::NAME,
        description: "SFMT-19937, 128-bit SIMD block regeneration",
        label: "SFMT engine",
        run: run_generator::<SfmtRand>,
    });
    registry.register(GeneratorVariant {
        name: Avx512Rand::NAME,
        description: "16-lane MT19937, one AVX-512 batch per 16 values",
        label: "AVX-512 engine",
        run: run_generator::<Avx512Rand>,
    });

    #[cfg(c_implementation_active)]
    registry.register(GeneratorVariant {
        name: MtRandC::NAME,
        description: "MT19937 C implementation",
        label: "MT19937 C engine",
        run: run_generator::<MtRandC>,
    });

    registry
}

/// Verify that every alternative kernel reproduces its reference.
pub fn verify_all() -> Result<(), String> {
    mt19937::verify()?;
    sfmt::verify()?;
    mt19937x16::verify()?;
    Ok(())
}
