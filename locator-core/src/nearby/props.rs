use locator_boundary::Coordinate;

pub const DEFAULT_TITLE: &str = "Nearby Locations";
pub const DEFAULT_BUTTON_TEXT: &str = "Find a Location";

/// Properties the widget is constructed with.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyProps {
    /// Without a coordinate nothing is queried.
    pub coordinate: Option<Coordinate>,
    /// Id of the entity the page is rendered for.
    pub id: String,
    pub title: String,
    pub link_to_locator: bool,
    pub button_text: String,
    /// Overrides the link to the search page.
    pub button_link: Option<String>,
}

impl NearbyProps {
    pub fn new(id: impl Into<String>, coordinate: Option<Coordinate>) -> Self {
        Self {
            coordinate,
            id: id.into(),
            title: DEFAULT_TITLE.to_string(),
            link_to_locator: true,
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            button_link: None,
        }
    }
}
