use reqwest::Url;
use url::form_urlencoded;

/// Parameters of a `jokes/random/` request.
///
/// Category names are checked against the live category list before being sent; unknown
/// ones are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomJokes {
    pub quantity: u32,
    pub limit_to: Vec<String>,
    pub exclude: Vec<String>,
    pub first_name: String,
    pub last_name: String,
}

impl Default for RandomJokes {
    fn default() -> Self {
        Self {
            quantity: 1,
            limit_to: Vec::new(),
            exclude: Vec::new(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }
}

impl RandomJokes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn limit_to<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.limit_to = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn exclude<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Whether the response carries a single joke object rather than a list.
    pub(crate) const fn is_single(&self) -> bool {
        self.quantity <= 1
    }

    pub(crate) fn filters_categories(&self) -> bool {
        !self.limit_to.is_empty() || !self.exclude.is_empty()
    }

    /// Builds the request URL; `known` is the category list fetched for this request, if any.
    pub(crate) fn url(
        &self,
        base_url: &Url,
        known: Option<&[String]>,
    ) -> Result<Url, url::ParseError> {
        let path = if self.is_single() {
            "jokes/random/".into()
        } else {
            format!("jokes/random/{}/", self.quantity)
        };

        let mut url = base_url.join(&path)?;
        let mut parameters = Vec::new();

        if let Some(known) = known {
            if let Some(parameter) = category_parameter("limitTo", &self.limit_to, known) {
                parameters.push(parameter);
            }
            if let Some(parameter) = category_parameter("exclude", &self.exclude, known) {
                parameters.push(parameter);
            }
        }

        if !self.first_name.is_empty() {
            parameters.push(format!("firstName={}", encode(&self.first_name)));
        }
        if !self.last_name.is_empty() {
            parameters.push(format!("lastName={}", encode(&self.last_name)));
        }

        if !parameters.is_empty() {
            url.set_query(Some(&parameters.join("&")));
        }

        Ok(url)
    }
}

/// Keeps only the candidates present in `known`, preserving their order.
pub fn known_categories<'a>(candidates: &'a [String], known: &[String]) -> Vec<&'a str> {
    let (valid, unknown) =
        candidates.iter().map(String::as_str).partition::<Vec<_>, _>(|category| {
            known.iter().any(|known| known == category)
        });

    if !unknown.is_empty() {
        log::debug!("dropping unknown categories: {}", unknown.join(", "));
    }

    valid
}

fn category_parameter(name: &str, candidates: &[String], known: &[String]) -> Option<String> {
    let valid = known_categories(candidates, known);
    (!valid.is_empty()).then(|| format!("{name}=[{}]", valid.join(",")))
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
