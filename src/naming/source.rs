/// A naming channel considered, in priority order, as raw material for a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Id,
    Text,
    Class,
    /// Any other registered attribute, read verbatim from the element.
    Attr(String),
}

impl NameSource {
    /// Parse a configured source name. Anything that is not one of the three
    /// built-in channels is treated as a literal attribute name.
    pub fn parse(value: &str) -> NameSource {
        match value {
            "id" => NameSource::Id,
            "text" => NameSource::Text,
            "class" => NameSource::Class,
            other => NameSource::Attr(other.to_string()),
        }
    }

    /// Parse a comma-separated priority list, e.g. `"id,text,class"`.
    pub fn parse_list(values: &str) -> Vec<NameSource> {
        values
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(NameSource::parse)
            .collect()
    }

    pub fn default_priority() -> Vec<NameSource> {
        vec![NameSource::Id, NameSource::Text, NameSource::Class]
    }

    pub fn label(&self) -> &str {
        match self {
            NameSource::Id => "id",
            NameSource::Text => "text",
            NameSource::Class => "class",
            NameSource::Attr(name) => name,
        }
    }
}
