// Environment variable loading

use std::collections::HashMap;
use std::env;

/// Reads `PREFIX_KEY=value` variables into lowercase `key` entries.
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// Collect every variable under the prefix (or all variables without one).
    pub fn load(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for (key, value) in env::vars() {
            match self.strip_prefix(&key) {
                Some(stripped) if !stripped.is_empty() => {
                    vars.insert(stripped.to_lowercase(), value);
                }
                _ => {}
            }
        }

        vars
    }

    fn strip_prefix<'a>(&self, key: &'a str) -> Option<&'a str> {
        match self.prefix {
            Some(ref prefix) => key
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_')),
            None => Some(key),
        }
    }
}
