use std::fmt;
use std::fmt::Formatter;

/// The grammar rule, or analysis outcome, a derivation step belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    Expression,
    Term,
    Factor,
    Power,
    Primary,
    Complete,
    Error,
}

/// One logged grammar-rule application, in the order it was recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DerivationStep {
    pub stage: Stage,
    pub description: String,
}

impl DerivationStep {
    pub fn new(stage: Stage, description: impl Into<String>) -> DerivationStep {
        DerivationStep {
            stage,
            description: description.into(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Expression => f.pad("Expression"),
            Stage::Term => f.pad("Term"),
            Stage::Factor => f.pad("Factor"),
            Stage::Power => f.pad("Power"),
            Stage::Primary => f.pad("Primary"),
            Stage::Complete => f.pad("Analysis complete"),
            Stage::Error => f.pad("Error"),
        }
    }
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_displayed_as_stage_and_description() {
        let step = DerivationStep::new(Stage::Factor, "Created factorial expression");

        assert_eq!(step.to_string(), "Factor: Created factorial expression");
    }

    #[test]
    fn completion_stage_has_readable_label() {
        let step = DerivationStep::new(Stage::Complete, "Expression is valid");

        assert_eq!(step.to_string(), "Analysis complete: Expression is valid");
    }
}
