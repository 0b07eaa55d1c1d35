//! The [`Query`] builder and its URL rendering.

use crate::Error;

use super::field::{DataClass, QueryField};
use super::predicate::Predicate;
use super::sort::{Limit, Sort};

/// A query against one data class.
///
/// Segments render in a fixed order: `class`, predicates (insertion order),
/// `limit`, `orderby`, `favorites`, `format/json`. Predicates are ANDed by
/// the service. A query is plain owned data; build one per call site.
#[derive(Clone, Debug)]
pub struct Query<F: QueryField> {
    class_name: String,
    predicates: Vec<Predicate<F>>,
    limit: Option<Limit>,
    sorts: Vec<Sort<F>>,
    favorites: Vec<String>,
}

impl<F: QueryField> Query<F> {
    /// Starts a query for the named class. The name must be non-empty and a
    /// single path segment.
    pub fn new(class_name: &str) -> Result<Self, Error> {
        check_segment("class name", class_name)?;
        Ok(Self::unchecked(class_name))
    }

    /// Starts a query for a catalog class, typed by its field set.
    pub fn for_class<C: DataClass<Field = F>>() -> Self {
        Self::unchecked(C::NAME)
    }

    fn unchecked(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            predicates: Vec::new(),
            limit: None,
            sorts: Vec::new(),
            favorites: Vec::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn predicates(&self) -> &[Predicate<F>] {
        &self.predicates
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn sorts(&self) -> &[Sort<F>] {
        &self.sorts
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn with_predicate(mut self, predicate: Predicate<F>) -> Self {
        self.predicates.push(predicate);
        self
    }
    pub fn with_predicates(mut self, predicates: impl IntoIterator<Item = Predicate<F>>) -> Self {
        self.predicates.extend(predicates);
        self
    }

    /// Sets the row limit, replacing any previous one.
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Appends a sort key. The first key added is the primary ordering.
    pub fn with_sort(mut self, sort: Sort<F>) -> Self {
        self.sorts.push(sort);
        self
    }
    pub fn with_sorts(mut self, sorts: impl IntoIterator<Item = Sort<F>>) -> Self {
        self.sorts.extend(sorts);
        self
    }

    /// Adds a server-defined favorites group by name. Adding the same name
    /// twice has no effect.
    pub fn with_favorite(mut self, name: &str) -> Result<Self, Error> {
        check_segment("favorite name", name)?;
        if name.contains(',') {
            return Err(Error::invalid(format!(
                "favorite name must not contain ',': '{}'",
                name
            )));
        }
        if !self.favorites.iter().any(|existing| existing == name) {
            self.favorites.push(name.to_string());
        }
        Ok(self)
    }
    pub fn with_favorites<I, S>(self, names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(self, |query, name| query.with_favorite(name.as_ref()))
    }

    /// Renders the full request URL below `base` (for example
    /// `https://www.space-track.org/basicspacedata/query`).
    pub fn to_url(&self, base: &str) -> String {
        let mut url = format!("{}/class/{}", base.trim_end_matches('/'), self.class_name);
        for predicate in self.predicates.iter() {
            url.push('/');
            url.push_str(&predicate.render_parameter());
        }
        if let Some(limit) = &self.limit {
            url.push('/');
            url.push_str(&limit.render_parameter());
        }
        if !self.sorts.is_empty() {
            let keys: Vec<String> = self.sorts.iter().map(Sort::render_parameter).collect();
            url.push_str("/orderby/");
            url.push_str(&keys.join(","));
        }
        if !self.favorites.is_empty() {
            url.push_str("/favorites/");
            url.push_str(&self.favorites.join(","));
        }
        url.push_str("/format/json");
        url
    }
}

fn check_segment(what: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::invalid(format!("{} must not be empty", what)));
    }
    if value.contains('/') || value.chars().any(char::is_whitespace) {
        return Err(Error::invalid(format!(
            "{} must be a single path segment: '{}'",
            what, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{field::tests::TestField, SortDirection};

    const BASE: &str = "https://example.com/basicspacedata/query";

    #[test]
    fn test_query_urls() {
        insta::assert_snapshot!(
            Query::<TestField>::new("gp").unwrap().to_url(BASE),
            @"https://example.com/basicspacedata/query/class/gp/format/json"
        );

        insta::assert_snapshot!(
            Query::new("gp")
                .unwrap()
                .with_predicate(Predicate::equal(TestField::NoradCatId, 25544).unwrap())
                .to_url(BASE),
            @"https://example.com/basicspacedata/query/class/gp/NORAD_CAT_ID/25544/format/json"
        );

        insta::assert_snapshot!(
            Query::new("gp")
                .unwrap()
                .with_predicate(Predicate::equal(TestField::NoradCatId, 25544).unwrap())
                .with_limit(Limit::with_offset(10, 5).unwrap())
                .with_sort(Sort::desc(TestField::Epoch))
                .with_sort(Sort::new(TestField::ObjectName, SortDirection::Asc))
                .with_favorites(["Navigation", "Weather"])
                .unwrap()
                .to_url(BASE),
            @"https://example.com/basicspacedata/query/class/gp/NORAD_CAT_ID/25544/limit/10,5/orderby/EPOCH desc,OBJECT_NAME asc/favorites/Navigation,Weather/format/json"
        );
    }

    #[test]
    fn empty_query_has_no_optional_segments() {
        let url = Query::<TestField>::new("satcat").unwrap().to_url(BASE);
        assert_eq!(url, format!("{}/class/satcat/format/json", BASE));
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let url = Query::<TestField>::new("satcat")
            .unwrap()
            .to_url("https://example.com/basicspacedata/query/");
        assert_eq!(
            url,
            "https://example.com/basicspacedata/query/class/satcat/format/json"
        );
    }

    #[test]
    fn segments_render_in_fixed_order() {
        // Configure in the opposite order to rendering.
        let url = Query::new("gp")
            .unwrap()
            .with_favorite("Amateur")
            .unwrap()
            .with_sort(Sort::desc(TestField::Epoch))
            .with_limit(Limit::new(3).unwrap())
            .with_predicate(Predicate::starts_with(TestField::ObjectName, "ISS").unwrap())
            .with_sort(Sort::asc(TestField::NoradCatId))
            .with_predicate(Predicate::is_not_null(TestField::Epoch))
            .to_url(BASE);
        assert_eq!(
            url,
            format!(
                "{}/class/gp/OBJECT_NAME/^ISS/EPOCH/<>null-val/limit/3\
                 /orderby/EPOCH desc,NORAD_CAT_ID asc/favorites/Amateur/format/json",
                BASE
            )
        );
    }

    #[test]
    fn last_limit_wins() {
        let query = Query::<TestField>::new("gp")
            .unwrap()
            .with_limit(Limit::new(100).unwrap())
            .with_limit(Limit::new(5).unwrap());
        assert_eq!(query.limit(), Some(Limit::new(5).unwrap()));
    }

    #[test]
    fn empty_collections_are_accepted() {
        let query = Query::<TestField>::new("gp")
            .unwrap()
            .with_predicates(Vec::new())
            .with_sorts(Vec::new())
            .with_favorites(Vec::<String>::new())
            .unwrap();
        assert_eq!(query.to_url(BASE), format!("{}/class/gp/format/json", BASE));
    }

    #[test]
    fn favorites_are_deduplicated() {
        let query = Query::<TestField>::new("gp")
            .unwrap()
            .with_favorites(["Navigation", "Navigation", "Weather"])
            .unwrap();
        assert_eq!(query.favorites(), ["Navigation", "Weather"]);
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert!(matches!(
            Query::<TestField>::new(""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Query::<TestField>::new("gp/extra"),
            Err(Error::InvalidArgument(_))
        ));
        let query = Query::<TestField>::new("gp").unwrap();
        assert!(matches!(
            query.clone().with_favorite(" "),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            query.with_favorite("a,b"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
