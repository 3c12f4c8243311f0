//! Sequential referral identifier allocation.
//!
//! The next identifier is derived from the last row of the store: its numeric part plus one.
//! An empty store starts at `REF000001`. Any other failure (unreadable file, malformed last id,
//! exhausted sequence) is returned to the caller rather than replaced with a default.
//!
//! Allocation reads and appends are not atomic; concurrent creators can be handed the same id.

use crate::store::ReferralStore;
use crate::{ReferralError, ReferralResult};
use referral_types::ReferralId;

/// Returns the identifier the next created referral should use.
///
/// # Errors
///
/// Returns:
/// - a read error if the store exists but cannot be read,
/// - [`ReferralError::InvalidStoredReferralId`] if the last row's id is not `REF` + six digits,
/// - [`ReferralError::IdAllocation`] if the last id is already `REF999999`.
pub fn next_referral_id(store: &ReferralStore) -> ReferralResult<ReferralId> {
    let Some(last) = store.last_referral_id()? else {
        return Ok(ReferralId::FIRST);
    };

    let last_id =
        ReferralId::parse(&last).map_err(|source| ReferralError::InvalidStoredReferralId {
            value: last.clone(),
            source,
        })?;

    last_id.next().map_err(ReferralError::IdAllocation)
}
