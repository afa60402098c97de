use serde::{Deserialize, Serialize};

pub const CORE_CHART_NAMESPACE: &str = "visualization";
pub const CORE_CHART_PACKAGE: &str = "corechart";

/// Names the runtime class a chart is drawn with.
///
/// `name` is the class (`LineChart`), `namespace` the object under `google`
/// holding it, `package` what the loader must fetch. Nothing checks the
/// class exists in the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartType {
    pub name: String,
    pub namespace: String,
    pub package: String,
}

impl ChartType {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        package: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            package: package.into(),
        }
    }

    /// A chart living in the `corechart` package.
    #[must_use]
    pub fn core(name: impl Into<String>) -> Self {
        Self::new(name, CORE_CHART_NAMESPACE, CORE_CHART_PACKAGE)
    }

    /// Fully qualified constructor path, e.g. `google.visualization.PieChart`.
    #[must_use]
    pub fn class_path(&self) -> String {
        format!("google.{}.{}", self.namespace, self.name)
    }
}
