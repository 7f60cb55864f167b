use crate::error::{Error, Result};
use indexmap::IndexMap;

pub mod interface;

pub use interface::{LoadPartial, PartialLoader};

/// Static mapping from partial name to partial template text.
pub type PartialMap = IndexMap<String, String>;

impl PartialLoader for PartialMap {
    fn load(&self, name: &str) -> Result<String> {
        self.get(name)
            .cloned()
            .ok_or_else(|| Error::PartialNotFound { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn map_loader_returns_registered_partial() {
        let mut partials = PartialMap::new();
        partials.insert("greeting".into(), "Hi!".into());
        assert_eq!(partials.load("greeting").unwrap(), "Hi!");
    }

    #[test]
    fn map_loader_reports_missing_partial() {
        let partials = PartialMap::new();
        match partials.load("missing") {
            Err(Error::PartialNotFound { name }) => assert_eq!(name, "missing"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn closures_act_as_loaders() {
        let loader = |name: &str| -> Result<String> { Ok(format!("<{name}>")) };
        assert_eq!(loader.load("footer").unwrap(), "<footer>");
    }

    #[test]
    fn shared_loaders_delegate() {
        let loader: Arc<dyn PartialLoader> =
            Arc::new(|name: &str| -> Result<String> { Ok(name.to_uppercase()) });
        assert_eq!(loader.load("nav").unwrap(), "NAV");
    }
}
