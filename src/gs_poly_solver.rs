// ============================================================================
// GS.Poly2D - Open source 2D rigid body physics engine
// 2026, Vincent Gsell
//
// This library is free software; you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public
// License as published by the Free Software Foundation; either
// version 2.1 of the License, or (at your option) any later version.
//
// This library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License along with this library; if not, write to the Free Software
// Foundation, Inc., 51 Franklin Street, Fifth Floor, Boston, MA  02110-1301  USA
//
// Created by Vincent Gsell [https://github.com/VincentGsell]
// ============================================================================

// History
// 20260612 - Rust port created.

// =============================================================================
// gs_poly_solver.rs - Solveur à impulsions
// =============================================================================
//
// Applique les impulsions de contact d'un manifold : restitution le long de
// la normale, frottement de Coulomb le long de la tangente, puis correction
// de position de type Baumgarte contre l'enfoncement résiduel.
//
// DEUX PASSES PAR PAIRE :
// Toutes les impulsions de contact sont d'abord calculées à partir du même
// état de vitesses, puis appliquées ensemble. L'ordre de traitement des
// contacts d'une même paire ne biaise donc pas le résultat.
//
// PARTAGE DE L'IMPULSION :
// L'impulsion scalaire est divisée par le nombre de contacts. C'est une
// approximation grossière d'une résolution LCP simultanée, mais elle
// converge avec suffisamment d'itérations du solveur.
//
// =============================================================================

use crate::gs_poly_collision::Manifold;
use crate::gs_poly_types::RigidBody;
use crate::gs_poly_vec2::{float_cross, vec_closely_equal, Vec2};

// =============================================================================
// Constantes de correction de position
// =============================================================================

/// Fraction de la pénétration corrigée par itération
const CORRECTION_PERCENT: f32 = 0.8;

/// Enfoncement toléré sans correction, évite le tremblement au repos
const CORRECTION_SLOP: f32 = 0.01;

// =============================================================================
// Impulsions de contact
// =============================================================================

/// Impulsion enregistrée pour un point de contact : impulsion normale,
/// impulsion de frottement, et les rayons vers le contact
struct ContactImpulse {
    impulse: Vec2,
    friction_impulse: Vec2,
    r_a: Vec2,
    r_b: Vec2,
}

/// Résout les impulsions d'un manifold entre deux corps.
/// Ne touche pas aux positions : voir positional_correction.
pub fn resolve_collision(a: &mut RigidBody, b: &mut RigidBody, manifold: &Manifold) {
    let normal = manifold.normal;

    let mut contacts: [Vec2; 2] = [Vec2::ZERO; 2];
    let contact_count = manifold.contact_count.min(2) as usize;
    if contact_count >= 1 {
        contacts[0] = manifold.contact1;
    }
    if contact_count >= 2 {
        contacts[1] = manifold.contact2;
    }

    // Constantes matérielles de la paire
    let restitution = a.restitution.min(b.restitution);
    let static_friction = a.static_friction.min(b.static_friction);
    let dynamic_friction = a.dynamic_friction.min(b.dynamic_friction);

    let mut impulses: Vec<ContactImpulse> = Vec::with_capacity(contact_count);

    for &contact in &contacts[..contact_count] {
        let radius_a = contact - a.position;
        let radius_b = contact - b.position;

        // Rayons perpendiculaires
        let r_a_perp = Vec2::new(-radius_a.y, radius_a.x);
        let r_b_perp = Vec2::new(-radius_b.y, radius_b.x);

        // Vitesses au point de contact : linéaire + tangentielle (ω × r)
        let vel_a = a.linear_velocity + float_cross(a.angular_velocity, radius_a);
        let vel_b = b.linear_velocity + float_cross(b.angular_velocity, radius_b);
        let relative_vel = vel_b - vel_a;

        let vel_along_normal = relative_vel.dot(normal);
        if vel_along_normal > 0.0 {
            // Déjà en séparation sur ce contact : la collision se résout
            // d'elle-même, aucune impulsion
            continue;
        }

        let ra_dot = r_a_perp.dot(normal);
        let rb_dot = r_b_perp.dot(normal);

        // Impulsion scalaire le long de la normale
        let inv_mass_terms = a.inverse_mass
            + b.inverse_mass
            + ra_dot * ra_dot * a.inverse_inertia
            + rb_dot * rb_dot * b.inverse_inertia;

        let mut j = -(1.0 + restitution) * vel_along_normal / inv_mass_terms;
        j /= contact_count as f32; // Partage entre les points de contact
        let impulse = normal * j;

        // Tangente : composante de la vitesse relative hors normale
        let tangent_raw = relative_vel - normal * relative_vel.dot(normal);
        let friction_impulse = if vec_closely_equal(tangent_raw, Vec2::ZERO) {
            // Pas de glissement mesurable : laisse le contact au repos
            // s'installer sans frottement parasite
            Vec2::ZERO
        } else {
            let tangent = tangent_raw.normalize();

            let ra_t = r_a_perp.dot(tangent);
            let rb_t = r_b_perp.dot(tangent);
            let inv_mass_terms_t = a.inverse_mass
                + b.inverse_mass
                + ra_t * ra_t * a.inverse_inertia
                + rb_t * rb_t * b.inverse_inertia;

            let mut jt = -relative_vel.dot(tangent) / inv_mass_terms_t;
            jt /= contact_count as f32;

            // Clamp de Coulomb : régime statique sous j·μs, sinon régime
            // cinétique borné par l'impulsion normale
            if jt.abs() <= j * static_friction {
                tangent * jt
            } else {
                tangent * (-j * dynamic_friction)
            }
        };

        impulses.push(ContactImpulse {
            impulse,
            friction_impulse,
            r_a: radius_a,
            r_b: radius_b,
        });
    }

    // Applique toutes les impulsions après le calcul de chaque contact
    for data in &impulses {
        let total = data.impulse + data.friction_impulse;

        a.linear_velocity -= total * a.inverse_mass;
        b.linear_velocity += total * b.inverse_mass;
        a.angular_velocity += -data.r_a.cross(total) * a.inverse_inertia;
        b.angular_velocity += data.r_b.cross(total) * b.inverse_inertia;
    }
}

// =============================================================================
// Correction de position
// =============================================================================

/// Résorbe l'enfoncement résiduel en déplaçant les corps le long de la
/// normale, proportionnellement à leur masse inverse. Sans apport
/// d'énergie : les vitesses ne sont pas touchées.
pub fn positional_correction(a: &mut RigidBody, b: &mut RigidBody, manifold: &Manifold) {
    let inv_mass_sum = a.inverse_mass + b.inverse_mass;
    if inv_mass_sum <= 0.0 {
        // Deux corps statiques
        return;
    }

    let corr_mag =
        (manifold.penetration - CORRECTION_SLOP).max(0.0) / inv_mass_sum * CORRECTION_PERCENT;
    let correction = manifold.normal * corr_mag;

    // move_by lève le flag update : les caches monde seront reconstruits
    // avant la prochaine lecture
    a.move_by(-(correction * a.inverse_mass));
    b.move_by(correction * b.inverse_mass);
}

// =============================================================================
// Tests unitaires
// =============================================================================
