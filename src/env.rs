use std::collections::{BTreeMap, HashMap};

/// Deployment indicator selecting between production and everything else
pub const NODE_ENV: &str = "NODE_ENV";

/// Base URL override, only honored in production
pub const NEXT_PUBLIC_API_URL: &str = "NEXT_PUBLIC_API_URL";

/// Named string lookups the configuration is resolved from
///
/// Implemented for the real process environment and for plain maps, so tests and callers can
/// resolve a configuration without touching the process environment.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from the environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}
