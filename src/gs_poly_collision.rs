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
// gs_poly_collision.rs - Phase étroite SAT et extraction des contacts
// =============================================================================
//
// THÉORÈME DE L'AXE SÉPARATEUR (SAT) :
// Deux formes convexes sont disjointes si et seulement s'il existe un axe
// sur lequel leurs projections ne se chevauchent pas. Pour des polygones,
// il suffit de tester les normales de toutes les arêtes des deux polygones.
//
// En un seul passage sur les arêtes, le SAT donne aussi le vecteur de
// translation minimal : la normale et la profondeur du plus petit
// chevauchement rencontré.
//
// CONVENTIONS :
// - La normale du manifold pointe de A vers B quand in_collision est vrai
// - Un contact exact (max_a == min_b) compte comme SÉPARÉ : l'inégalité
//   stricte implique le contact
// - 0 <= contact_count <= 2, et in_collision <=> contact_count > 0
//
// Le manifold ne retient aucune référence aux corps : les paires sont
// résolues par indices dans la collection du monde, le manifold ne
// transporte que la géométrie du contact.
//
// =============================================================================

use crate::gs_poly_types::RigidBody;
use crate::gs_poly_vec2::{point_segment_distance, vec_closely_equal, Vec2};

// =============================================================================
// Manifold - Résultat de collision
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct Manifold {
    /// Normale unitaire, pointe de A vers B quand in_collision
    pub normal: Vec2,

    /// Premier point de contact (monde)
    pub contact1: Vec2,

    /// Deuxième point de contact (monde), valide si contact_count == 2
    pub contact2: Vec2,

    /// Nombre de points de contact, dans {0, 1, 2}
    pub contact_count: u32,

    /// Profondeur de pénétration le long de la normale, >= 0
    pub penetration: f32,

    /// Les deux corps se chevauchent
    pub in_collision: bool,
}

// =============================================================================
// Projection sur un axe
// =============================================================================

/// Projette chaque sommet sur l'axe et retourne (min, max)
pub fn project_axis(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = vertices[0].dot(axis);
    let mut max = min;

    // On part de 1, vertices[0] a établi la base
    for &v in &vertices[1..] {
        let projection = v.dot(axis);
        if projection < min {
            min = projection;
        }
        if projection > max {
            max = projection;
        }
    }

    (min, max)
}

// =============================================================================
// Boucle SAT
// =============================================================================

/// Teste les normales d'arêtes de A contre les projections de A et B.
/// Retourne false dès qu'un axe séparateur est trouvé ; sinon met à jour
/// penetration et normal avec le plus petit chevauchement rencontré.
fn sat_loop(a: &RigidBody, b: &RigidBody, penetration: &mut f32, normal: &mut Vec2) -> bool {
    let verts_a = &a.transformed_vertices;
    let verts_b = &b.transformed_vertices;

    for i in 0..verts_a.len() {
        let va = verts_a[i];
        let vb = verts_a[(i + 1) % verts_a.len()]; // Indexation circulaire
        let edge = vb - va;

        // Perpendiculaire de l'arête, candidate à la séparation
        let axis = Vec2::new(-edge.y, edge.x).normalize();
        if axis == Vec2::ZERO {
            // Arête dégénérée : projection ponctuelle, aucun axe à tester
            continue;
        }

        let (min_a, max_a) = project_axis(verts_a, axis);
        let (min_b, max_b) = project_axis(verts_b, axis);

        if max_a <= min_b || max_b <= min_a {
            // Un écart existe : les deux polygones sont séparés.
            // Le contact exact compte comme séparé.
            return false;
        }

        // Chevauchement sur cet axe : garde le plus petit
        let axis_depth = (max_a - min_b).min(max_b - min_a);
        if axis_depth < *penetration {
            *penetration = axis_depth;
            *normal = axis;
        }
    }

    true
}

// =============================================================================
// Extraction des points de contact
// =============================================================================
//
// Pour des polygones convexes, le contact est soit un sommet sur une arête
// (un point), soit une arête sur une arête (deux candidats quasi-minimaux).
// On énumère donc tous les couples (sommet de P, arête de Q) dans les deux
// sens et on retient les candidats à distance quasi minimale.
//
// =============================================================================

struct ContactResult {
    contact1: Vec2,
    contact2: Vec2,
    contact_count: u32,
}

/// Candidat transitoire : point le plus proche et distance au carré
struct ContactCandidate {
    point: Vec2,
    dist_sq: f32,
}

/// Seuil d'acceptation au-dessus de la distance minimale : deux sommets
/// peuvent être proches sans se toucher exactement, on les enregistre
/// quand même comme contact
const MIN_DIST_EPS: f32 = 1e-4;

fn get_contact_points(a: &RigidBody, b: &RigidBody) -> ContactResult {
    let mut candidates: Vec<ContactCandidate> =
        Vec::with_capacity(a.transformed_vertices.len() * b.transformed_vertices.len() * 2);

    // Pousse les candidats "sommets de P contre arêtes de Q"
    let mut gather = |p: &RigidBody, q: &RigidBody| {
        let verts_p = &p.transformed_vertices;
        let verts_q = &q.transformed_vertices;

        for &vp in verts_p {
            for i in 0..verts_q.len() {
                let q1 = verts_q[i];
                let q2 = verts_q[(i + 1) % verts_q.len()];
                let (point, dist_sq) = point_segment_distance(q1, q2, vp);
                candidates.push(ContactCandidate { point, dist_sq });
            }
        }
    };

    // Collecte dans les deux sens
    gather(a, b);
    gather(b, a);

    if candidates.is_empty() {
        return ContactResult {
            contact1: Vec2::ZERO,
            contact2: Vec2::ZERO,
            contact_count: 0,
        };
    }

    // Distance minimale globale
    let mut min_dist_sq = candidates[0].dist_sq;
    for c in &candidates {
        if c.dist_sq < min_dist_sq {
            min_dist_sq = c.dist_sq;
        }
    }

    let threshold = min_dist_sq + MIN_DIST_EPS;

    let mut contact1 = Vec2::ZERO;
    let mut contact2 = Vec2::ZERO;
    let mut contact_count = 0u32;

    // Premier candidat sous le seuil
    for c in &candidates {
        if c.dist_sq <= threshold {
            contact1 = c.point;
            contact_count = 1;
            break;
        }
    }

    // Premier candidat suivant sous le seuil et distinct du premier
    for c in &candidates {
        if c.dist_sq <= threshold && !vec_closely_equal(contact1, c.point) {
            contact2 = c.point;
            contact_count = 2;
            break;
        }
    }

    ContactResult {
        contact1,
        contact2,
        contact_count,
    }
}

// =============================================================================
// SAT complet
// =============================================================================

/// Test de collision SAT entre deux corps.
/// Précondition : les caches monde des deux corps sont à jour.
pub fn sat_collision(a: &RigidBody, b: &RigidBody) -> Manifold {
    // Polygone vide : pas de collision, pas de contacts
    if a.transformed_vertices.is_empty() || b.transformed_vertices.is_empty() {
        return Manifold::default();
    }

    let mut penetration = f32::INFINITY; // Convergera vers la plus petite pénétration
    let mut normal = Vec2::ZERO;
    let mut in_collision = true;

    // Évalue les normales d'arêtes des deux polygones. Les deux passes
    // tournent même si la première trouve un écart : penetration et normal
    // n'ont de sens que si in_collision reste vrai.
    if !sat_loop(a, b, &mut penetration, &mut normal) {
        in_collision = false;
    }
    if !sat_loop(b, a, &mut penetration, &mut normal) {
        in_collision = false;
    }

    if !in_collision {
        return Manifold::default();
    }

    // Oriente la normale de A vers B avant l'extraction, pour que tout le
    // code aval voie la même convention
    if normal.dot(b.position - a.position) < 0.0 {
        normal = -normal;
    }

    let contacts = get_contact_points(a, b);

    Manifold {
        normal,
        contact1: contacts.contact1,
        contact2: contacts.contact2,
        contact_count: contacts.contact_count,
        penetration,
        // Un polygone vide court-circuite l'extraction : l'invariant
        // in_collision <=> contact_count > 0 est maintenu ici
        in_collision: contacts.contact_count > 0,
    }
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gs_poly_transform::world_space;
    use crate::gs_poly_vec2::vec2;

    fn diamond_at(x: f32, y: f32) -> RigidBody {
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        body.snap_to(vec2(x, y));
        world_space(&mut body);
        body
    }

    fn box_at(x: f32, y: f32, w: f32, h: f32) -> RigidBody {
        let mut body = RigidBody::default();
        body.set_box_vertices(w, h);
        body.snap_to(vec2(x, y));
        world_space(&mut body);
        body
    }

    #[test]
    fn test_project_axis() {
        let verts = [vec2(0.0, -1.0), vec2(1.0, 0.0), vec2(0.0, 1.0), vec2(-1.0, 0.0)];
        let (min, max) = project_axis(&verts, vec2(1.0, 0.0));
        assert!((min + 1.0).abs() < 1e-5);
        assert!((max - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_separated_bodies() {
        let a = diamond_at(0.0, 0.0);
        let b = diamond_at(5.0, 0.0);
        let m = sat_collision(&a, &b);
        assert!(!m.in_collision);
        assert_eq!(m.contact_count, 0);
    }

    #[test]
    fn test_exact_touch_is_separated() {
        // Deux boîtes dont les bords se touchent exactement : max_a == min_b,
        // l'inégalité stricte implique le contact, donc ici SÉPARÉ
        let a = box_at(0.0, 0.0, 2.0, 2.0);
        let b = box_at(2.0, 0.0, 2.0, 2.0);
        let m = sat_collision(&a, &b);
        assert!(!m.in_collision);
    }

    #[test]
    fn test_overlap_normal_points_a_to_b() {
        let a = box_at(0.0, 0.0, 2.0, 2.0);
        let b = box_at(1.5, 0.0, 2.0, 2.0);
        let m = sat_collision(&a, &b);

        assert!(m.in_collision);
        assert!(m.contact_count > 0);
        // Chevauchement de 0.5 le long de x
        assert!((m.penetration - 0.5).abs() < 1e-4);
        // Normale unitaire orientée de A vers B
        assert!((m.normal.length() - 1.0).abs() < 1e-4);
        assert!(m.normal.dot(b.position - a.position) >= 0.0);
        assert!((m.normal.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_swapped_operands_flip_normal() {
        let a = box_at(0.0, 0.0, 2.0, 2.0);
        let b = box_at(1.5, 0.0, 2.0, 2.0);
        let m_ab = sat_collision(&a, &b);
        let m_ba = sat_collision(&b, &a);

        assert!(m_ab.in_collision && m_ba.in_collision);
        assert!((m_ab.normal.x + m_ba.normal.x).abs() < 1e-4);
        assert!((m_ab.penetration - m_ba.penetration).abs() < 1e-4);
    }

    #[test]
    fn test_edge_on_edge_two_contacts() {
        // Deux boîtes alignées qui se chevauchent : contact arête-arête,
        // deux points de contact distincts
        let a = box_at(0.0, 0.0, 2.0, 2.0);
        let b = box_at(0.0, 1.8, 2.0, 2.0);
        let m = sat_collision(&a, &b);

        assert!(m.in_collision);
        assert_eq!(m.contact_count, 2);
        assert!(!vec_closely_equal(m.contact1, m.contact2));
    }

    #[test]
    fn test_vertex_on_edge_single_contact() {
        // Losange pointe en bas posé sur le plat d'une boîte : un seul point
        let a = box_at(0.0, 0.0, 4.0, 2.0);
        let b = diamond_at(0.0, 1.9);
        let m = sat_collision(&a, &b);

        assert!(m.in_collision);
        assert_eq!(m.contact_count, 1);
        // Le contact est proche de la pointe basse du losange
        assert!(m.contact1.y > 0.8 && m.contact1.y < 1.1);
        assert!(m.contact1.x.abs() < 0.1);
    }

    #[test]
    fn test_manifold_invariant() {
        // in_collision <=> contact_count > 0, pénétration >= 0
        let cases = [
            (diamond_at(0.0, 0.0), diamond_at(1.2, 0.0)),
            (diamond_at(0.0, 0.0), diamond_at(8.0, 0.0)),
            (box_at(0.0, 0.0, 2.0, 2.0), box_at(0.5, 0.5, 2.0, 2.0)),
        ];
        for (a, b) in &cases {
            let m = sat_collision(a, b);
            assert_eq!(m.in_collision, m.contact_count > 0);
            if m.in_collision {
                assert!(m.penetration >= 0.0);
                assert!((m.normal.length() - 1.0).abs() < 1e-4);
            }
        }
    }
}
