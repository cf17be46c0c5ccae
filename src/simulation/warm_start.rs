//! Warm starting: carry accumulated impulses across ticks
//!
//! Contacts are rebuilt from scratch every tick, so the previous tick's
//! converged impulse magnitudes are the only solver state that survives.
//! Seeding the new contacts with them lets the solver start from a nearly
//! converged point instead of from zero.
//!
//! Only body-body contacts are warm-started; wall contacts always start at
//! zero. The lookup table is transient — rebuilt here each tick, never
//! persisted.

use std::collections::HashMap;

use crate::simulation::collision::{Contact, ContactKey};
use crate::simulation::states::Body;

/// Seed `contacts` from `previous` and pre-apply the seeded impulses.
///
/// Matching is by canonical unordered body-id pair, so the match holds no
/// matter which order the pair was scanned in either tick. Every seeded
/// impulse is immediately applied to both bodies along the contact normal,
/// putting the velocity state where the previous tick's solution left it
/// before the first sweep runs.
pub fn warm_start(contacts: &mut [Contact], previous: &[Contact], bodies: &mut [Body]) {
    if previous.is_empty() {
        return;
    }

    // Transient lookup of last tick's accumulated impulses, pair keys only.
    let mut cache: HashMap<ContactKey, f64> = HashMap::with_capacity(previous.len());
    for contact in previous {
        if let ContactKey::Pair { .. } = contact.key {
            cache.insert(contact.key, contact.impulse_acc);
        }
    }

    for contact in contacts.iter_mut() {
        let Some(j) = contact.body_b else {
            continue; // wall contacts start cold
        };
        let Some(&impulse) = cache.get(&contact.key) else {
            continue;
        };
        if impulse <= 0.0 {
            continue;
        }

        contact.impulse_acc = impulse;

        // Pre-apply along the normal: A is pushed against it, B along it.
        let i = contact.body_a;
        let push = contact.normal * impulse;
        let inv_a = bodies[i].inv_mass;
        let inv_b = bodies[j].inv_mass;
        bodies[i].vel -= push * inv_a;
        bodies[j].vel += push * inv_b;
    }
}
