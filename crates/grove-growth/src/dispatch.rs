//! Variant code to structure generator mapping.
//!
//! Random consumption per family is fixed: single-form families draw
//! nothing, split families draw exactly once (`roll(one_in)`).

use grove_blocks::BlockRegistry;
use grove_structures::{GeneratorForm, GeneratorSet, GrowthRng, StructureGenerator};

use crate::variant::SaplingVariant;

/// The generator forms a family can grow into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Forms {
    Single(GeneratorForm),
    /// `rare` on a zero draw out of `one_in`, `common` otherwise.
    Split {
        rare: GeneratorForm,
        common: GeneratorForm,
        one_in: u32,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Family {
    pub forms: Forms,
}

const fn single(form: GeneratorForm) -> Family {
    Family {
        forms: Forms::Single(form),
    }
}

const fn split(rare: GeneratorForm, common: GeneratorForm, one_in: u32) -> Family {
    Family {
        forms: Forms::Split {
            rare,
            common,
            one_in,
        },
    }
}

/// Indexed by variant code.
pub static FAMILIES: [Family; SaplingVariant::COUNT] = [
    single(GeneratorForm::Apple),
    single(GeneratorForm::YellowAutumn),
    split(GeneratorForm::BambooShoot, GeneratorForm::BambooGrove, 8),
    single(GeneratorForm::Mystic),
    split(GeneratorForm::OminousLarge, GeneratorForm::OminousSmall, 8),
    single(GeneratorForm::Dead),
    single(GeneratorForm::Fir),
    single(GeneratorForm::Promised),
    single(GeneratorForm::OrangeAutumn),
    single(GeneratorForm::Origin),
    single(GeneratorForm::PinkCherry),
    single(GeneratorForm::Maple),
    single(GeneratorForm::WhiteCherry),
    single(GeneratorForm::HellbarkBush),
    single(GeneratorForm::Jacaranda),
    single(GeneratorForm::Persimmon),
];

impl Family {
    pub fn of(variant: SaplingVariant) -> &'static Family {
        &FAMILIES[variant.index()]
    }

    pub fn pick(&self, rng: &mut dyn GrowthRng) -> GeneratorForm {
        match self.forms {
            Forms::Single(form) => form,
            Forms::Split {
                rare,
                common,
                one_in,
            } => {
                if rng.roll(one_in) == 0 {
                    rare
                } else {
                    common
                }
            }
        }
    }

    /// Every form this family can produce.
    pub fn forms(&self) -> Vec<GeneratorForm> {
        match self.forms {
            Forms::Single(form) => vec![form],
            Forms::Split { rare, common, .. } => vec![rare, common],
        }
    }
}

pub struct VariantDispatcher {
    generators: GeneratorSet,
}

impl VariantDispatcher {
    pub fn new(generators: GeneratorSet) -> Self {
        Self { generators }
    }

    pub fn from_registry(reg: &BlockRegistry) -> Self {
        Self::new(GeneratorSet::from_registry(reg))
    }

    pub fn family(&self, variant: SaplingVariant) -> &'static Family {
        Family::of(variant)
    }

    /// Table lookup plus the family's own draw, if any.
    pub fn form_for(&self, variant: SaplingVariant, rng: &mut dyn GrowthRng) -> GeneratorForm {
        Family::of(variant).pick(rng)
    }

    /// The generator for this growth attempt, or `None` when the chosen form
    /// has no generator registered.
    pub fn select(
        &self,
        variant: SaplingVariant,
        rng: &mut dyn GrowthRng,
    ) -> Option<&dyn StructureGenerator> {
        let form = self.form_for(variant, rng);
        let generator = self.generators.get(form);
        if generator.is_none() {
            log::warn!(target: "growth", "variant {} picked form '{}' with no generator", variant, form);
        }
        generator
    }

    pub fn generators(&self) -> &GeneratorSet {
        &self.generators
    }

    pub fn generators_mut(&mut self) -> &mut GeneratorSet {
        &mut self.generators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grove_structures::ScriptedRng;
    use std::collections::HashSet;

    #[test]
    fn table_covers_every_form_once() {
        let mut seen = HashSet::new();
        for fam in FAMILIES.iter() {
            for form in fam.forms() {
                assert!(seen.insert(form), "{} mapped twice", form);
            }
        }
        assert_eq!(seen.len(), GeneratorForm::ALL.len());
    }

    #[test]
    fn only_bamboo_and_dark_split() {
        let split: Vec<_> = SaplingVariant::all()
            .filter(|v| matches!(Family::of(*v).forms, Forms::Split { .. }))
            .collect();
        assert_eq!(split, vec![SaplingVariant::BAMBOO, SaplingVariant::DARK]);
        assert_eq!(
            Family::of(SaplingVariant::HELLBARK).forms,
            Forms::Single(GeneratorForm::HellbarkBush)
        );
    }

    #[test]
    fn single_forms_draw_nothing_split_forms_draw_once() {
        let dispatcher = VariantDispatcher::new(GeneratorSet::new());
        for v in SaplingVariant::all() {
            let mut rng = ScriptedRng::new([5]);
            dispatcher.form_for(v, &mut rng);
            let expected: &[u32] = match Family::of(v).forms {
                Forms::Single(_) => &[],
                Forms::Split { .. } => &[8],
            };
            assert_eq!(rng.bounds(), expected, "{}", v);
        }
    }

    #[test]
    fn split_draw_zero_is_rare_anything_else_common() {
        let dispatcher = VariantDispatcher::new(GeneratorSet::new());
        let mut rng = ScriptedRng::new([0, 3, 7, 1]);
        assert_eq!(
            dispatcher.form_for(SaplingVariant::BAMBOO, &mut rng),
            GeneratorForm::BambooShoot
        );
        assert_eq!(
            dispatcher.form_for(SaplingVariant::BAMBOO, &mut rng),
            GeneratorForm::BambooGrove
        );
        assert_eq!(
            dispatcher.form_for(SaplingVariant::DARK, &mut rng),
            GeneratorForm::OminousSmall
        );
        assert_eq!(
            dispatcher.form_for(SaplingVariant::DARK, &mut rng),
            GeneratorForm::OminousSmall
        );
    }

    #[test]
    fn unmapped_form_selects_nothing() {
        let dispatcher = VariantDispatcher::new(GeneratorSet::new());
        let mut rng = ScriptedRng::default();
        assert!(dispatcher.select(SaplingVariant::DEFAULT, &mut rng).is_none());
    }
}
