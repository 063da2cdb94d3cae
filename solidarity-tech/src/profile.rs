//! Client profiles: named subsets of the endpoint catalog.

use fetch_core::{ConfigError, EndpointDescriptor};
use strum::{Display, EnumIter, EnumString};

use crate::catalog::ENDPOINTS;

/// Operations available in [`Profile::Lite`].
pub const LITE_OPERATIONS: &[&str] = &[
    "getActivities",
    "getCalls",
    "getChapters",
    "getCustomUserProperties",
    "getTexts",
    "postTexts",
    "postUserActions",
    "postUserNotes",
    "postUsers",
    "getUsers",
    "putUsersId",
];

/// Which operations a client may call.
///
/// ## Examples
///
/// ```rust
/// use solidarity_tech::Profile;
///
/// let profile: Profile = "lite".parse().unwrap();
/// assert!(profile.allows("getUsers"));
/// assert!(!profile.allows("getEvents"));
/// assert!(Profile::Full.allows("getEvents"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Profile {
    /// Every operation in the catalog.
    #[default]
    Full,
    /// People, texts and the reference lists they depend on.
    Lite,
}

impl Profile {
    /// Returns `true` if the operation `id` is part of this profile.
    pub fn allows(&self, id: &str) -> bool {
        match self {
            Self::Full => ENDPOINTS.iter().any(|endpoint| endpoint.id == id),
            Self::Lite => LITE_OPERATIONS.contains(&id),
        }
    }

    /// The descriptors in this profile, in catalog order.
    pub fn endpoints(&self) -> Vec<&'static EndpointDescriptor> {
        ENDPOINTS
            .iter()
            .filter(|endpoint| self.allows(endpoint.id))
            .collect()
    }

    /// Rejects an endpoint outside this profile.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::EndpointNotEnabled`] if the endpoint is not
    /// part of the profile.
    pub fn check(&self, endpoint: &EndpointDescriptor) -> Result<(), ConfigError> {
        if self.allows(endpoint.id) {
            Ok(())
        } else {
            Err(ConfigError::EndpointNotEnabled {
                id: endpoint.id.to_string(),
                profile: self.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use strum::IntoEnumIterator;

    #[test]
    fn full_profile_covers_catalog() {
        assert_eq!(Profile::Full.endpoints().len(), ENDPOINTS.len());
    }

    #[test]
    fn lite_operations_exist_in_catalog() {
        for id in LITE_OPERATIONS {
            assert!(catalog::find(id).is_some(), "{id} missing from catalog");
        }
        assert_eq!(Profile::Lite.endpoints().len(), LITE_OPERATIONS.len());
    }

    #[test]
    fn lite_rejects_events() {
        let err = Profile::Lite.check(&catalog::GET_EVENTS).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Endpoint getEvents is not enabled in the lite profile"
        );
        assert!(Profile::Lite.check(&catalog::PUT_USERS_ID).is_ok());
    }

    #[test]
    fn display_and_parse() {
        for profile in Profile::iter() {
            let parsed: Profile = profile.to_string().parse().unwrap();
            assert_eq!(parsed, profile);
        }
        assert_eq!("FULL".parse::<Profile>().unwrap(), Profile::Full);
        assert!("minimal".parse::<Profile>().is_err());
    }
}
