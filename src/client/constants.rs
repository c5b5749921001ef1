pub(super) const BASE_URL: &str = "https://backpack.tf";

/// Upstream hard cap on ids per users/info lookup.
pub(super) const MAX_USER_LOOKUP: usize = 100;
