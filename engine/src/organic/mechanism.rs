//! SN1 / SN2 / E1 / E2 selection from substrate and conditions.

use luma_types::{Mechanism, Solvent, Strength, SubstituentClass};
use serde::Serialize;

use super::OrganicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MechanismInputs {
    pub substrate: SubstituentClass,
    pub nucleophile: Strength,
    pub base: Strength,
    pub solvent: Solvent,
    /// Elevated temperature (heat, reflux, Δ).
    pub hot: bool,
}

impl MechanismInputs {
    /// Weak nucleophile, weak base, polar protic solvent, no heat.
    #[must_use]
    pub const fn new(substrate: SubstituentClass) -> Self {
        Self {
            substrate,
            nucleophile: Strength::Weak,
            base: Strength::Weak,
            solvent: Solvent::PolarProtic,
            hot: false,
        }
    }

    /// Builds inputs from raw labels such as `("3°", "weak", "strong", "polar_aprotic")`.
    pub fn from_labels(
        substrate: &str,
        nucleophile: &str,
        base: &str,
        solvent: &str,
        hot: bool,
    ) -> Result<Self, OrganicError> {
        Ok(Self {
            substrate: SubstituentClass::parse(substrate)?,
            nucleophile: Strength::parse(nucleophile)?,
            base: Strength::parse(base)?,
            solvent: Solvent::parse(solvent)?,
            hot,
        })
    }
}

/// Pick the favored pathway.
///
/// A strong base always wins (E2). Without one, tertiary substrates ionize
/// (SN1, or E1 when hot), primary substrates need a strong nucleophile
/// (SN2), and secondary substrates go SN2 only with a strong nucleophile in
/// a polar aprotic solvent.
pub fn decide(inputs: &MechanismInputs) -> Result<Mechanism, OrganicError> {
    if !matches!(
        inputs.substrate,
        SubstituentClass::Primary | SubstituentClass::Secondary | SubstituentClass::Tertiary
    ) {
        return Err(OrganicError::UnsupportedSubstrate(inputs.substrate));
    }

    if inputs.base == Strength::Strong {
        return Ok(Mechanism::E2);
    }

    match inputs.substrate {
        SubstituentClass::Tertiary => Ok(if inputs.hot {
            Mechanism::E1
        } else {
            Mechanism::Sn1
        }),
        SubstituentClass::Primary => {
            if inputs.nucleophile == Strength::Strong {
                Ok(Mechanism::Sn2)
            } else {
                Err(OrganicError::WeakNucleophilePrimary)
            }
        }
        _ => {
            if inputs.nucleophile == Strength::Strong && inputs.solvent == Solvent::PolarAprotic {
                Ok(Mechanism::Sn2)
            } else if inputs.hot {
                Ok(Mechanism::E1)
            } else {
                Ok(Mechanism::Sn1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tertiary_weak_protic_cold_is_sn1() {
        let inputs =
            MechanismInputs::from_labels("tertiary", "weak", "weak", "polar protic", false)
                .unwrap();
        assert_eq!(decide(&inputs), Ok(Mechanism::Sn1));
        let hot = MechanismInputs { hot: true, ..inputs };
        assert_eq!(decide(&hot), Ok(Mechanism::E1));
    }

    #[test]
    fn strong_base_always_eliminates() {
        for substrate in [
            SubstituentClass::Primary,
            SubstituentClass::Secondary,
            SubstituentClass::Tertiary,
        ] {
            let inputs = MechanismInputs {
                base: Strength::Strong,
                nucleophile: Strength::Strong,
                ..MechanismInputs::new(substrate)
            };
            assert_eq!(decide(&inputs), Ok(Mechanism::E2));
        }
    }

    #[test]
    fn primary_needs_strong_nucleophile() {
        let weak = MechanismInputs::new(SubstituentClass::Primary);
        assert_eq!(decide(&weak), Err(OrganicError::WeakNucleophilePrimary));
        let strong = MechanismInputs {
            nucleophile: Strength::Strong,
            ..weak
        };
        assert_eq!(decide(&strong), Ok(Mechanism::Sn2));
    }

    #[test]
    fn secondary_depends_on_solvent_and_heat() {
        let aprotic = MechanismInputs {
            nucleophile: Strength::Strong,
            solvent: Solvent::PolarAprotic,
            ..MechanismInputs::new(SubstituentClass::Secondary)
        };
        assert_eq!(decide(&aprotic), Ok(Mechanism::Sn2));

        let protic = MechanismInputs {
            solvent: Solvent::PolarProtic,
            ..aprotic
        };
        assert_eq!(decide(&protic), Ok(Mechanism::Sn1));
        assert_eq!(
            decide(&MechanismInputs { hot: true, ..protic }),
            Ok(Mechanism::E1)
        );
    }

    #[test]
    fn resonance_substrates_are_unsupported() {
        let inputs = MechanismInputs::new(SubstituentClass::Benzylic);
        assert_eq!(
            decide(&inputs),
            Err(OrganicError::UnsupportedSubstrate(SubstituentClass::Benzylic))
        );
    }
}
