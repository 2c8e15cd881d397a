use std::collections::BTreeMap;

use grove_blocks::{Block, BlockRegistry};

use crate::bush::BushGenerator;
use crate::forms::{FormShape, GeneratorForm};
use crate::tree::TreeGenerator;
use crate::StructureGenerator;

/// Generator instances keyed by form, built once and shared by every growth
/// attempt.
#[derive(Default)]
pub struct GeneratorSet {
    generators: BTreeMap<GeneratorForm, Box<dyn StructureGenerator>>,
}

impl GeneratorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds every form whose blocks exist in `reg`. Forms naming unknown
    /// blocks stay unmapped.
    pub fn from_registry(reg: &BlockRegistry) -> Self {
        let mut set = Self::new();
        for form in GeneratorForm::ALL {
            match build(form, reg) {
                Some(generator) => set.insert(form, generator),
                None => log::warn!(
                    "no generator for form '{}': blocks {:?} not registered",
                    form,
                    form.blocks()
                ),
            }
        }
        log::debug!(
            "built {} of {} structure forms",
            set.len(),
            GeneratorForm::ALL.len()
        );
        set
    }

    pub fn insert(&mut self, form: GeneratorForm, generator: Box<dyn StructureGenerator>) {
        self.generators.insert(form, generator);
    }

    pub fn remove(&mut self, form: GeneratorForm) -> Option<Box<dyn StructureGenerator>> {
        self.generators.remove(&form)
    }

    pub fn get(&self, form: GeneratorForm) -> Option<&dyn StructureGenerator> {
        self.generators.get(&form).map(|g| g.as_ref())
    }

    pub fn contains(&self, form: GeneratorForm) -> bool {
        self.generators.contains_key(&form)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Forms without a generator, in declaration order.
    pub fn missing(&self) -> Vec<GeneratorForm> {
        GeneratorForm::ALL
            .into_iter()
            .filter(|f| !self.contains(*f))
            .collect()
    }
}

fn build(form: GeneratorForm, reg: &BlockRegistry) -> Option<Box<dyn StructureGenerator>> {
    let names = form.blocks();
    let trunk = reg.block_by_name(names.trunk)?;
    let leaves: Option<Block> = match names.leaves {
        Some(name) => Some(reg.block_by_name(name)?),
        None => None,
    };
    let generator: Box<dyn StructureGenerator> = match form.shape() {
        FormShape::Tree {
            trunk_min,
            trunk_extra,
            canopy,
        } => Box::new(TreeGenerator::new(
            form.name(),
            trunk,
            leaves,
            trunk_min,
            trunk_extra,
            canopy,
        )),
        FormShape::Bush { max_radius } => {
            Box::new(BushGenerator::new(form.name(), trunk, leaves?, max_radius))
        }
    };
    Some(generator)
}
