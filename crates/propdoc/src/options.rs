use serde::{Deserialize, Serialize};

/// How a class's resolved heritage names are turned into component metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeritageMode {
    /// Use the first two resolved names as base type and prop shape.
    #[default]
    Resolved,
    /// Any class with a base type is a `Component` whose props are `Props`.
    Convention,
}

/// Shape of the assembled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputVariant {
    /// No `displayName`; `{}` when no component or no prop shape is found.
    Classic,
    /// `displayName` set; `null` when no component is found and an empty
    /// prop map when its prop shape is missing.
    #[default]
    Named,
}

/// Options shared by the extractor and the assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocgenOptions {
    pub heritage_mode: HeritageMode,
    pub output_variant: OutputVariant,
    /// Namespaces folded into the following identifier, in priority order.
    pub namespace_markers: Vec<String>,
    /// Base type names that make a declaration a component.
    pub component_markers: Vec<String>,
    /// Emit union alternatives as `type.value`.
    pub include_value_sets: bool,
}

impl Default for DocgenOptions {
    fn default() -> Self {
        Self {
            heritage_mode: HeritageMode::default(),
            output_variant: OutputVariant::default(),
            namespace_markers: vec!["React".to_string(), "Preact".to_string()],
            component_markers: [
                "Component",
                "PureComponent",
                "StatelessComponent",
                "SFC",
                "FC",
                "FunctionComponent",
                "React.Component",
                "React.PureComponent",
                "React.StatelessComponent",
                "React.SFC",
                "React.FC",
                "React.FunctionComponent",
                "Preact.Component",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            include_value_sets: false,
        }
    }
}

impl DocgenOptions {
    /// Returns `true` when `base_type` names a recognized component base.
    pub fn is_component_marker(&self, base_type: &str) -> bool {
        self.component_markers.iter().any(|marker| marker == base_type)
    }
}
