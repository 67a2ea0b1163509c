use locator_boundary::LocationProfile;

/// The locations found by the latest applied query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultList(Vec<LocationProfile>);

impl ResultList {
    /// Drops the entity itself and keeps at most `limit` entries.
    #[must_use]
    pub fn from_entities(entities: Vec<LocationProfile>, own_id: &str, limit: usize) -> Self {
        let profiles = entities
            .into_iter()
            .filter(|p| p.meta.id != own_id)
            .take(limit)
            .collect();
        Self(profiles)
    }

    /// Removes the entity with the given id, leaving the others untouched.
    pub fn retain_excluding(&mut self, own_id: &str) {
        self.0.retain(|p| p.meta.id != own_id);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[LocationProfile] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationProfile> {
        self.0.iter()
    }
}
