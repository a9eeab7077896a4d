use crate::query::{param::Param, query_value::QueryValue};

/// Ordered name → parameter mapping for one request.
///
/// Setting a name twice replaces the earlier entry in place, so insertion
/// order is the order parameters hit the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams(Vec<(String, Param<QueryValue>)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<QueryValue>>(&mut self, name: impl Into<String>, param: Param<V>) {
        let name = name.into();
        let param: Param<QueryValue> = param.map(Into::into);

        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = param,
            None => self.0.push((name, param)),
        }
    }

    pub fn with<V: Into<QueryValue>>(mut self, name: impl Into<String>, param: Param<V>) -> Self {
        self.set(name, param);
        self
    }

    pub fn value<V: Into<QueryValue>>(self, name: impl Into<String>, value: V) -> Self {
        self.with(name, Param::Value(value))
    }

    pub fn get(&self, name: &str) -> Option<&Param<QueryValue>> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, param)| param)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param<QueryValue>)> {
        self.0.iter().map(|(name, param)| (name.as_str(), param))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops every `Unset` and `Null` entry. Kept entries are untouched.
    pub fn filtered(&self) -> QueryParams {
        QueryParams(
            self.0
                .iter()
                .filter(|(_, param)| matches!(param, Param::Value(_)))
                .cloned()
                .collect(),
        )
    }

    /// Wire form: only present values, stringified.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(name, param)| {
                param
                    .as_value()
                    .map(|value| (name.clone(), value.to_string()))
            })
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Param<QueryValue>)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, Param<QueryValue>)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, param) in iter {
            params.set(name, param);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{param::Param, query_params::QueryParams, query_value::QueryValue};

    fn mixed() -> QueryParams {
        QueryParams::new()
            .with("a", Param::<i64>::Unset)
            .value("b", 5)
            .with("c", Param::<i64>::Null)
    }

    #[test]
    fn sends_only_present_values() {
        let pairs = mixed().to_pairs();

        assert_eq!(pairs, vec![("b".to_string(), "5".to_string())]);

        let url = reqwest::Url::parse_with_params("https://api.tikhub.io/api/v1/example", &pairs)
            .unwrap();
        assert_eq!(url.query(), Some("b=5"));
    }

    #[test]
    fn filtering_keeps_names_and_values() {
        let params = QueryParams::new()
            .value("aweme_id", "7345492945006595379")
            .with("cursor", Param::<i64>::Null)
            .value("count", 20)
            .value("is_private", false);

        let filtered = params.filtered();

        assert_eq!(filtered.len(), 3);
        assert_eq!(
            filtered.get("aweme_id"),
            Some(&Param::Value(QueryValue::Str("7345492945006595379".to_string())))
        );
        assert_eq!(filtered.get("count"), Some(&Param::Value(QueryValue::Int(20))));
        assert_eq!(filtered.get("is_private"), Some(&Param::Value(QueryValue::Bool(false))));
        assert_eq!(filtered.get("cursor"), None);
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = mixed().filtered();
        let twice = once.filtered();

        assert_eq!(once, twice);
        assert_eq!(once.to_pairs(), mixed().to_pairs());
    }

    #[test]
    fn setting_a_name_again_replaces_it_in_place() {
        let params = QueryParams::new()
            .value("x", 1)
            .value("y", 2)
            .value("x", 3);

        assert_eq!(
            params.to_pairs(),
            vec![
                ("x".to_string(), "3".to_string()),
                ("y".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn collects_from_an_iterator() {
        let params: QueryParams = [
            ("keyword", Param::Value(QueryValue::from("cat"))),
            ("offset", Param::Unset),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_pairs(), vec![("keyword".to_string(), "cat".to_string())]);
    }
}
