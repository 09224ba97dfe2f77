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
// gs_poly_aabb.rs - AABB (Axis-Aligned Bounding Box)
// =============================================================================
//
// Un AABB est la plus petite boîte alignée sur les axes contenant une forme.
// Dérivé à chaque tick depuis les sommets monde d'un corps, jamais persisté.
//
// Le test d'intersection compte les bords qui se touchent comme un
// chevauchement : la phase large doit être conservatrice, c'est le SAT qui
// tranche ensuite.
//
// =============================================================================

use crate::gs_poly_types::RigidBody;
use crate::gs_poly_vec2::Vec2;

// =============================================================================
// Aabb - Boîte englobante
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

/// Calcule l'AABB d'un corps depuis son cache monde.
/// Précondition : le cache transformed_vertices est à jour (voir
/// gs_poly_transform::world_space). Coût O(V).
pub fn get_aabb(body: &RigidBody) -> Aabb {
    let mut verts = body.transformed_vertices.iter();

    // Corps sans sommets : boîte dégénérée sur la position
    let first = match verts.next() {
        Some(&v) => v,
        None => {
            return Aabb {
                min: body.position,
                max: body.position,
            }
        }
    };

    let mut min = first;
    let mut max = first;

    for &v in verts {
        if v.x < min.x {
            min.x = v.x;
        }
        if v.y < min.y {
            min.y = v.y;
        }
        if v.x > max.x {
            max.x = v.x;
        }
        if v.y > max.y {
            max.y = v.y;
        }
    }

    Aabb { min, max }
}

/// Test d'intersection de deux AABB, bords qui se touchent inclus
#[inline]
pub fn aabb_intersection(a: &Aabb, b: &Aabb) -> bool {
    // Une boîte complètement à gauche ou à droite de l'autre
    if a.max.x < b.min.x || b.max.x < a.min.x {
        return false;
    }
    // Une boîte complètement au-dessus ou en dessous de l'autre
    if a.max.y < b.min.y || b.max.y < a.min.y {
        return false;
    }
    true
}

// =============================================================================
// Tests unitaires
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gs_poly_transform::world_space;
    use std::f32::consts::PI;

    fn aabb(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Aabb {
        Aabb {
            min: Vec2::new(min_x, min_y),
            max: Vec2::new(max_x, max_y),
        }
    }

    #[test]
    fn test_get_aabb_diamond() {
        // 4-gon de rayon 1 : losange, AABB de (-1,-1) à (1,1) autour du centre
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        body.snap_to(Vec2::new(10.0, 5.0));
        world_space(&mut body);

        let bb = get_aabb(&body);
        assert!((bb.min.x - 9.0).abs() < 1e-4);
        assert!((bb.min.y - 4.0).abs() < 1e-4);
        assert!((bb.max.x - 11.0).abs() < 1e-4);
        assert!((bb.max.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_get_aabb_rotation_invariant_for_square_quarter_turn() {
        // Un quart de tour d'un losange redonne le même AABB
        let mut body = RigidBody::new_polygon(4, 1.0, 2.0);
        world_space(&mut body);
        let before = get_aabb(&body);

        body.rotate(PI / 2.0);
        world_space(&mut body);
        let after = get_aabb(&body);

        assert!((before.min.x - after.min.x).abs() < 1e-4);
        assert!((before.max.y - after.max.y).abs() < 1e-4);
    }

    #[test]
    fn test_intersection_overlap() {
        let a = aabb(0.0, 0.0, 2.0, 2.0);
        let b = aabb(1.0, 1.0, 3.0, 3.0);
        assert!(aabb_intersection(&a, &b));
        assert!(aabb_intersection(&b, &a));
    }

    #[test]
    fn test_intersection_touching_edges_count() {
        // Bords exactement en contact : compte comme intersection
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(1.0, 0.0, 2.0, 1.0);
        assert!(aabb_intersection(&a, &b));
        assert!(aabb_intersection(&b, &a));
    }

    #[test]
    fn test_intersection_disjoint() {
        let a = aabb(0.0, 0.0, 1.0, 1.0);
        let b = aabb(5.0, 5.0, 6.0, 6.0);
        assert!(!aabb_intersection(&a, &b));
        assert!(!aabb_intersection(&b, &a));
    }

    #[test]
    fn test_intersection_is_symmetric() {
        let cases = [
            (aabb(0.0, 0.0, 1.0, 1.0), aabb(0.5, -0.5, 1.5, 0.5)),
            (aabb(0.0, 0.0, 1.0, 1.0), aabb(2.0, 0.0, 3.0, 1.0)),
            (aabb(-3.0, -3.0, 3.0, 3.0), aabb(-1.0, -1.0, 1.0, 1.0)),
        ];
        for (a, b) in cases {
            assert_eq!(aabb_intersection(&a, &b), aabb_intersection(&b, &a));
        }
    }
}
