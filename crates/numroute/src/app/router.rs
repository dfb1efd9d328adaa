//! Router - dispatch a named domain through the engine
//!
//! The domain table is built once in [`Router::new`] and never mutated.

use crate::app::engine::{Timed, process, timed};
use crate::domain::transform::{Domain, Transform};
use crate::error::RouterError;
use tracing::{debug, warn};

#[cfg(feature = "hashmap-lookup")]
use rustc_hash::FxHashMap;

#[cfg(not(feature = "hashmap-lookup"))]
use crate::constants::DOMAIN_COUNT;

/// Fixed mapping from domain names to transforms
#[derive(Debug, Clone)]
pub struct Router {
    #[cfg(feature = "hashmap-lookup")]
    table: FxHashMap<&'static str, Transform>,
    #[cfg(not(feature = "hashmap-lookup"))]
    table: [(&'static str, Transform); DOMAIN_COUNT],
}

impl Router {
    /// Create a router bound to the `analytics`, `ai` and `simulation` domains
    #[cfg(feature = "hashmap-lookup")]
    pub fn new() -> Self {
        let table = Domain::ALL
            .into_iter()
            .map(|domain| (domain.name(), domain.transform()))
            .collect();
        Self { table }
    }

    /// Create a router bound to the `analytics`, `ai` and `simulation` domains
    #[cfg(not(feature = "hashmap-lookup"))]
    pub fn new() -> Self {
        let table = Domain::ALL.map(|domain| (domain.name(), domain.transform()));
        Self { table }
    }

    /// Look up the transform bound to `domain`
    #[cfg(feature = "hashmap-lookup")]
    pub fn transform(&self, domain: &str) -> Option<Transform> {
        self.table.get(domain).copied()
    }

    /// Look up the transform bound to `domain`
    #[cfg(not(feature = "hashmap-lookup"))]
    pub fn transform(&self, domain: &str) -> Option<Transform> {
        self.table
            .iter()
            .find(|(name, _)| *name == domain)
            .map(|&(_, transform)| transform)
    }

    /// Domain names held by this router, in `Domain::ALL` order
    #[cfg(feature = "hashmap-lookup")]
    pub fn domains(&self) -> impl Iterator<Item = &'static str> {
        Domain::ALL
            .into_iter()
            .map(Domain::name)
            .filter(|name| self.table.contains_key(name))
    }

    /// Domain names held by this router, in `Domain::ALL` order
    #[cfg(not(feature = "hashmap-lookup"))]
    pub fn domains(&self) -> impl Iterator<Item = &'static str> {
        self.table.iter().map(|&(name, _)| name)
    }

    /// Apply the transform bound to `domain` to every value
    ///
    /// Returns `RouterError::UnknownDomain` if `domain` is not in the table.
    pub fn execute(&self, domain: &str, values: &[f64]) -> Result<Vec<f64>, RouterError> {
        let Some(transform) = self.transform(domain) else {
            warn!(domain, "unknown domain requested");
            return Err(RouterError::UnknownDomain(domain.to_string()));
        };

        debug!(domain, len = values.len(), "routing values");
        Ok(process(|x| transform.apply(x), values))
    }

    /// [`Router::execute`] wrapped in [`timed`]
    pub fn execute_timed(
        &self,
        domain: &str,
        values: &[f64],
    ) -> Result<Timed<Vec<f64>>, RouterError> {
        let Timed { result, elapsed_ms } = timed(|| self.execute(domain, values));
        Ok(Timed {
            result: result?,
            elapsed_ms,
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_analytics() {
        let router = Router::new();
        assert_eq!(router.execute("analytics", &[1.0, 2.0]), Ok(vec![2.0, 4.0]));
    }

    #[test]
    fn test_execute_ai() {
        let router = Router::new();
        assert_eq!(router.execute("ai", &[2.0, 3.0]), Ok(vec![4.0, 9.0]));
    }

    #[test]
    fn test_execute_simulation() {
        let router = Router::new();
        assert_eq!(
            router.execute("simulation", &[0.0, -10.0]),
            Ok(vec![10.0, 0.0])
        );
    }

    #[test]
    fn test_execute_unknown_domain() {
        let router = Router::new();
        assert_eq!(
            router.execute("bogus", &[1.0]),
            Err(RouterError::UnknownDomain("bogus".to_string()))
        );
    }

    #[test]
    fn test_execute_empty_values() {
        let router = Router::new();
        for domain in router.domains() {
            assert_eq!(router.execute(domain, &[]), Ok(vec![]));
        }
    }

    #[test]
    fn test_transform_lookup() {
        let router = Router::default();
        assert_eq!(router.transform("ai"), Some(Transform::Square));
        assert_eq!(router.transform(""), None);
    }

    #[test]
    fn test_domains_in_table_order() {
        let router = Router::new();
        let names: Vec<_> = router.domains().collect();
        assert_eq!(names, vec!["analytics", "ai", "simulation"]);
    }

    #[test]
    fn test_domains_resolve_in_table() {
        let router = Router::new();
        for name in router.domains() {
            assert!(router.transform(name).is_some(), "{} missing", name);
        }
        assert_eq!(router.domains().count(), crate::constants::DOMAIN_COUNT);
    }

    #[test]
    fn test_execute_timed() {
        let router = Router::new();
        let t = router.execute_timed("analytics", &[5.0]).unwrap();
        assert_eq!(t.result, vec![10.0]);
        assert!(t.elapsed_ms >= 0.0);
    }

    #[test]
    fn test_execute_timed_unknown_domain() {
        let router = Router::new();
        assert!(matches!(
            router.execute_timed("bogus", &[1.0]),
            Err(RouterError::UnknownDomain(name)) if name == "bogus"
        ));
    }
}
