use clap::ValueEnum;
use propdoc::{HeritageMode, OutputVariant};

/// Output shape of the generated document
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum VariantArg {
    /// No displayName; `{}` when nothing can be documented
    #[value(name = "classic")]
    Classic,

    /// displayName included; `null` when no component is found
    #[value(name = "named")]
    Named,
}

impl From<VariantArg> for OutputVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Classic => OutputVariant::Classic,
            VariantArg::Named => OutputVariant::Named,
        }
    }
}

/// Heritage interpretation
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum HeritageArg {
    /// Use the base type and type argument names as written
    #[value(name = "resolved")]
    Resolved,

    /// Treat every derived class as `Component` with `Props`
    #[value(name = "convention")]
    Convention,
}

impl From<HeritageArg> for HeritageMode {
    fn from(value: HeritageArg) -> Self {
        match value {
            HeritageArg::Resolved => HeritageMode::Resolved,
            HeritageArg::Convention => HeritageMode::Convention,
        }
    }
}
