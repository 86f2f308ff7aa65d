use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read access to request parameters, the way an HTTP form exposes them.
///
/// HTTP layers implement this for their request type so that
/// [`Catalogue::resolve`](crate::catalogue::Catalogue::resolve) can read from it.
pub trait FormValues {
    fn form_value(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> FormValues for HashMap<String, String, S> {
    fn form_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FormValues for BTreeMap<String, String> {
    fn form_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// First match wins, like repeated query parameters.
impl FormValues for [(&str, &str)] {
    fn form_value(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_take_first_match() {
        let pairs: &[(&str, &str)] = &[("from", "MENLO"), ("from", "KSFO")];
        assert_eq!(pairs.form_value("from"), Some("MENLO"));
        assert_eq!(pairs.form_value("to"), None);
    }

    #[test]
    fn maps() {
        let mut h = HashMap::new();
        h.insert("to".to_owned(), "KSJC".to_owned());
        assert_eq!(h.form_value("to"), Some("KSJC"));

        let b: BTreeMap<_, _> = h.into_iter().collect();
        assert_eq!(b.form_value("to"), Some("KSJC"));
        assert_eq!(b.form_value("from"), None);
    }
}
