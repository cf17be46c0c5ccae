//! Contact generation for walls and body pairs
//!
//! Runs once per tick and produces the full contact list from scratch —
//! no incremental tracking. Generation order is stable (per-body wall
//! contacts in fixed boundary order, then pairs in ascending `(i, j)`)
//! because the Gauss-Seidel solver is order-sensitive.
//!
//! Effective mass and the Baumgarte bias are computed here, at
//! construction time, and stay fixed for the whole tick.

use crate::simulation::params::{Arena, BAUMGARTE, DT, SLOP};
use crate::simulation::states::{normalize_or_zero, Body, NVec2};

/// The four arena boundaries, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Floor,
    Ceiling,
    Left,
    Right,
}

/// Identity of a contact, used to match contacts across ticks.
///
/// Pair keys canonicalize the unordered body-id pair as `(min, max)` so the
/// warm-start lookup is order-independent. Wall keys exist for completeness
/// and diagnostics; they are never warm-started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKey {
    Wall { body: u64, side: WallSide },
    Pair { lo: u64, hi: u64 },
}

impl ContactKey {
    /// Canonical key for an unordered body-id pair.
    pub fn pair(a: u64, b: u64) -> Self {
        Self::Pair {
            lo: a.min(b),
            hi: a.max(b),
        }
    }
}

/// A single normal constraint between a body and a wall or another body.
/// Rebuilt every tick.
#[derive(Debug, Clone)]
pub struct Contact {
    pub body_a: usize, // index into the body store, always present
    pub body_b: Option<usize>, // None = wall contact
    pub key: ContactKey, // identity for cross-tick matching
    pub normal: NVec2, // unit, points from A toward B (into the wall for wall contacts)
    pub penetration: f64, // distance - sum of radii; negative = overlapping
    pub impulse_acc: f64, // accumulated normal impulse, always >= 0
    pub effective_mass: f64, // 1 / (inv_mass_a + inv_mass_b), fixed per tick
    pub bias: f64, // Baumgarte stabilization bias, >= 0, fixed per tick
}

/// Baumgarte bias from signed penetration: a velocity that removes a fixed
/// fraction of the overlap beyond SLOP per tick. Non-negative.
fn baumgarte_bias(penetration: f64) -> f64 {
    -BAUMGARTE * (penetration + SLOP).min(0.0) / DT
}

/// Build the full contact list for this tick.
pub fn detect_contacts(bodies: &[Body], arena: &Arena) -> Vec<Contact> {
    let mut contacts = Vec::new();

    // Wall contacts: each body against each boundary, fixed order.
    // A static body embedded past a boundary still generates a contact;
    // its zero inverse mass makes the resulting impulses no-ops.
    for (i, body) in bodies.iter().enumerate() {
        wall_contacts(i, body, arena, &mut contacts);
    }

    // Body-body contacts: exhaustive pairwise scan, i < j.
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            // Static-static pairs can never move and are skipped entirely
            if bodies[i].is_static && bodies[j].is_static {
                continue;
            }
            if let Some(contact) = pair_contact(i, j, &bodies[i], &bodies[j]) {
                contacts.push(contact);
            }
        }
    }

    contacts
}

/// Emit one contact per violated boundary for `body` (0-4 per body).
///
/// Normals follow the A-toward-B convention with the wall as body B, so
/// each normal points from the body into its boundary: floor `(0, +1)`,
/// ceiling `(0, -1)`, left `(-1, 0)`, right `(+1, 0)`.
fn wall_contacts(index: usize, body: &Body, arena: &Arena, out: &mut Vec<Contact>) {
    let walls = [
        (WallSide::Floor, NVec2::new(0.0, 1.0), (arena.height - body.pos.y) - body.radius),
        (WallSide::Ceiling, NVec2::new(0.0, -1.0), body.pos.y - body.radius),
        (WallSide::Left, NVec2::new(-1.0, 0.0), body.pos.x - body.radius),
        (WallSide::Right, NVec2::new(1.0, 0.0), (arena.width - body.pos.x) - body.radius),
    ];

    for (side, normal, penetration) in walls {
        if penetration >= 0.0 {
            continue;
        }
        // The wall side of the constraint is immovable, so the effective
        // mass is the body's own. Static bodies get zero, which zeroes
        // every impulse the solver would apply through this contact.
        let effective_mass = if body.inv_mass > 0.0 {
            1.0 / body.inv_mass
        } else {
            0.0
        };
        out.push(Contact {
            body_a: index,
            body_b: None,
            key: ContactKey::Wall { body: body.id, side },
            normal,
            penetration,
            impulse_acc: 0.0,
            effective_mass,
            bias: baumgarte_bias(penetration),
        });
    }
}

/// Disk-disk overlap test for one unordered pair.
///
/// Contact iff center distance is below the radius sum. The normal points
/// from A toward B; coincident centers fall back to a zero normal rather
/// than producing NaN.
fn pair_contact(i: usize, j: usize, a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let dist = delta.norm();
    let radius_sum = a.radius + b.radius;

    if dist >= radius_sum {
        return None;
    }

    let penetration = dist - radius_sum;
    // At least one of the pair is dynamic (static-static filtered upstream),
    // so the inverse-mass sum is positive and the division is safe.
    let effective_mass = 1.0 / (a.inv_mass + b.inv_mass);

    Some(Contact {
        body_a: i,
        body_b: Some(j),
        key: ContactKey::pair(a.id, b.id),
        normal: normalize_or_zero(delta),
        penetration,
        impulse_acc: 0.0,
        effective_mass,
        bias: baumgarte_bias(penetration),
    })
}
