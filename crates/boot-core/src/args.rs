//! Launcher argument store
//!
//! Splits raw arguments into named options (`-name=value`, `--name=value`,
//! bare `-flag`) and positional parameters. A lone `--` ends option
//! processing.

use std::collections::HashMap;

/// Overrides the modules directory.
pub const MODULES_DIR: &str = "modulesdir";
/// Directory of user-provided configuration files.
pub const CONFIG_DIR: &str = "configdir";
/// Overrides the webapp directory.
pub const WEBAPP_DIR: &str = "webappdir";

/// Parsed launcher arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    options: HashMap<String, Option<String>>,
    parameters: Vec<String>,
}

impl ArgumentStore {
    /// Parse raw arguments. Later duplicates of an option win.
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        let mut options_done = false;

        for arg in raw.into_iter().map(Into::into) {
            if options_done {
                store.parameters.push(arg);
                continue;
            }
            if arg == "--" {
                options_done = true;
                continue;
            }

            let name = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .filter(|name| !name.is_empty() && !name.starts_with('='));
            match name {
                Some(name) => {
                    let (key, value) = match name.split_once('=') {
                        Some((key, value)) => (key, Some(value.to_string())),
                        None => (name, None),
                    };
                    store.options.insert(key.to_string(), value);
                }
                None => store.parameters.push(arg),
            }
        }

        store
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Value of an option; `None` if absent or given as a bare flag.
    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).and_then(|v| v.as_deref())
    }

    /// Positional parameters in their original order.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }
}
