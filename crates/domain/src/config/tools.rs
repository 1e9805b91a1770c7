use serde::{Deserialize, Serialize};

/// Locations of the external enumeration tools.
///
/// subfinder is resolved from PATH unless an absolute path is given.
/// Sublist3r is a Python script and needs an interpreter plus the checkout
/// directory it must run from; all three are deployment-specific and belong
/// in configuration rather than in code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// subfinder binary (default: "subfinder")
    #[serde(default = "default_subfinder_bin")]
    pub subfinder_bin: String,

    /// Python interpreter used to run Sublist3r (default: "python3")
    #[serde(default = "default_sublist3r_python")]
    pub sublist3r_python: String,

    /// Directory containing the Sublist3r checkout (default: "/opt/Sublist3r")
    #[serde(default = "default_sublist3r_dir")]
    pub sublist3r_dir: String,

    /// Script name inside the checkout (default: "sublist3r.py")
    #[serde(default = "default_sublist3r_script")]
    pub sublist3r_script: String,
}

fn default_subfinder_bin() -> String {
    "subfinder".to_string()
}

fn default_sublist3r_python() -> String {
    "python3".to_string()
}

fn default_sublist3r_dir() -> String {
    "/opt/Sublist3r".to_string()
}

fn default_sublist3r_script() -> String {
    "sublist3r.py".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            subfinder_bin: default_subfinder_bin(),
            sublist3r_python: default_sublist3r_python(),
            sublist3r_dir: default_sublist3r_dir(),
            sublist3r_script: default_sublist3r_script(),
        }
    }
}
