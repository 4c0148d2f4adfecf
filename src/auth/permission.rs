//! Role-based permission checks

/// Roles allowed to create property listings
///
/// Flat set membership only: no wildcard, no hierarchy, no inheritance
/// between roles.
pub const PROPERTY_LISTING_ROLES: [&str; 5] = [
    "landlord",
    "real_estate_agency",
    "lodge_owner",
    "bnb_owner",
    "admin",
];

/// Whether a caller with the given role may create property listings
///
/// An absent role (no profile record, or a profile without a role field)
/// is denied.
pub fn can_list_properties(role: Option<&str>) -> bool {
    role.map_or(false, |role| PROPERTY_LISTING_ROLES.contains(&role))
}
