use uuid::Uuid;

/// Category entity
///
/// A named, URL-slugged tag attached to blog posts.
///
/// # Invariants
/// - `id` is assigned once by the storage gateway and never changes
/// - `name` and `url_handle` are only ever replaced together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub url_handle: String,
}

/// The caller-supplied part of a category (everything except its id)
///
/// Used both for creation and as the wholesale replacement on update.
/// No emptiness or uniqueness checks happen here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub url_handle: String,
}

impl CategoryDraft {
    pub fn new(name: impl Into<String>, url_handle: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url_handle: url_handle.into(),
        }
    }
}

impl Category {
    /// Builds a stored category from a draft and a gateway-generated id
    pub fn from_draft(id: Uuid, draft: CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name,
            url_handle: draft.url_handle,
        }
    }

    /// Replaces every mutable field with the values of `other`
    ///
    /// The id of `self` is kept; the id carried by `other` is ignored.
    pub fn overwrite_from(&mut self, other: &Category) {
        self.name = other.name.clone();
        self.url_handle = other.url_handle.clone();
    }
}
